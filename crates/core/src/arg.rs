//! Dynamic argument values.
//!
//! Selections and option values arrive untyped: a variable name, a list of
//! indices, a logical mask, a fill value. [`Arg`] carries any of those shapes
//! until the code consuming it decides what it accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An untyped argument value.
///
/// Deserializes from any YAML/JSON/TOML scalar or homogeneous sequence.
/// An empty sequence deserializes as an empty `Texts`, which [`Arg::is_empty`]
/// treats the same as `Empty`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    /// No value (`null`, `~`).
    #[default]
    Empty,
    Text(String),
    Texts(Vec<String>),
    Number(f64),
    Numbers(Vec<f64>),
    Logical(bool),
    Logicals(Vec<bool>),
}

impl Arg {
    /// Whether the value holds no elements.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Texts(v) => v.is_empty(),
            Self::Numbers(v) => v.is_empty(),
            Self::Logicals(v) => v.is_empty(),
            Self::Text(_) | Self::Number(_) | Self::Logical(_) => false,
        }
    }

    /// Get the text of a scalar text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Short description of the value's shape, used in error messages.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Empty => "an empty value",
            Self::Text(_) => "text",
            Self::Texts(_) => "a list of text",
            Self::Number(_) => "a number",
            Self::Numbers(_) => "a list of numbers",
            Self::Logical(_) => "a logical",
            Self::Logicals(_) => "a list of logicals",
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<&str>> for Arg {
    fn from(value: Vec<&str>) -> Self {
        Self::Texts(value.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Arg {
    fn from(value: Vec<String>) -> Self {
        Self::Texts(value)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<Vec<f64>> for Arg {
    fn from(value: Vec<f64>) -> Self {
        Self::Numbers(value)
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Self::Logical(value)
    }
}

impl From<Vec<bool>> for Arg {
    fn from(value: Vec<bool>) -> Self {
        Self::Logicals(value)
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            write!(f, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{item}")?;
            }
            write!(f, "]")
        }

        match self {
            Self::Empty => write!(f, "[]"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Texts(v) => list(f, v),
            Self::Number(n) => write!(f, "{n}"),
            Self::Numbers(v) => list(f, v),
            Self::Logical(b) => write!(f, "{b}"),
            Self::Logicals(v) => list(f, v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(Arg::Empty.is_empty());
        assert!(Arg::Texts(vec![]).is_empty());
        assert!(Arg::Numbers(vec![]).is_empty());
        assert!(!Arg::Text(String::new()).is_empty());
        assert!(!Arg::Logical(false).is_empty());
    }

    #[test]
    fn test_deserialize_shapes() {
        let arg: Arg = serde_yaml::from_str("A").unwrap();
        assert_eq!(arg, Arg::from("A"));

        let arg: Arg = serde_yaml::from_str("[A, C]").unwrap();
        assert_eq!(arg, Arg::from(vec!["A", "C"]));

        let arg: Arg = serde_yaml::from_str("2").unwrap();
        assert_eq!(arg, Arg::Number(2.0));

        let arg: Arg = serde_yaml::from_str("[1, 3]").unwrap();
        assert_eq!(arg, Arg::Numbers(vec![1.0, 3.0]));

        let arg: Arg = serde_yaml::from_str("[true, false]").unwrap();
        assert_eq!(arg, Arg::Logicals(vec![true, false]));

        let arg: Arg = serde_yaml::from_str("~").unwrap();
        assert_eq!(arg, Arg::Empty);
    }

    #[test]
    fn test_mixed_sequence_is_rejected() {
        assert!(serde_yaml::from_str::<Arg>("[A, 1]").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Arg::from(vec!["a", "b"]).to_string(), "[a, b]");
        assert_eq!(Arg::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(Arg::Number(5.0).to_string(), "5");
        assert_eq!(Arg::Logical(true).to_string(), "true");
    }
}
