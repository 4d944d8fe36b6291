//! Coercion of untyped [`Arg`] values into the typed values records store.

use std::str::FromStr;

use crate::arg::Arg;

use super::errors::OptionError;
use super::schema::OptionField;

fn wrong_shape(field: OptionField, expected: &str, got: &Arg) -> OptionError {
    OptionError::invalid(field, format!("expected {expected}, got {}", got.shape()))
}

/// Scalar text; an empty value reads as the empty string.
pub(crate) fn text(field: OptionField, value: &Arg) -> Result<String, OptionError> {
    match value {
        Arg::Text(s) => Ok(s.clone()),
        Arg::Empty => Ok(String::new()),
        other => Err(wrong_shape(field, "text", other)),
    }
}

/// Scalar or list of text; an empty value reads as the empty list.
pub(crate) fn texts(field: OptionField, value: &Arg) -> Result<Vec<String>, OptionError> {
    match value {
        Arg::Text(s) => Ok(vec![s.clone()]),
        Arg::Texts(v) => Ok(v.clone()),
        other if other.is_empty() => Ok(Vec::new()),
        other => Err(wrong_shape(field, "text or a list of text", other)),
    }
}

/// Logical scalar, or the numbers 0 and 1.
pub(crate) fn logical(field: OptionField, value: &Arg) -> Result<bool, OptionError> {
    match value {
        Arg::Logical(b) => Ok(*b),
        Arg::Number(n) if *n == 0.0 => Ok(false),
        Arg::Number(n) if *n == 1.0 => Ok(true),
        other => Err(wrong_shape(field, "a logical value", other)),
    }
}

/// Numeric scalar; logicals read as 0 and 1.
pub(crate) fn number(field: OptionField, value: &Arg) -> Result<f64, OptionError> {
    match value {
        Arg::Number(n) => Ok(*n),
        Arg::Logical(b) => Ok(if *b { 1.0 } else { 0.0 }),
        other => Err(wrong_shape(field, "a number", other)),
    }
}

/// Text of exactly one character.
pub(crate) fn single_char(field: OptionField, value: &Arg) -> Result<char, OptionError> {
    let s = text(field, value)?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(OptionError::invalid(field, format!("expected a single character, got '{s}'"))),
    }
}

/// Text naming one of an enumerated set of values.
pub(crate) fn choice<T>(field: OptionField, value: &Arg) -> Result<T, OptionError>
where
    T: FromStr<Err = String>,
{
    match value {
        Arg::Text(s) => s.parse().map_err(|e| OptionError::invalid(field, e)),
        other => Err(wrong_shape(field, "text", other)),
    }
}

/// Reject lists containing the same entry twice.
pub(crate) fn unique(field: OptionField, values: &[String]) -> Result<(), OptionError> {
    for (i, v) in values.iter().enumerate() {
        if values[..i].contains(v) {
            return Err(OptionError::invalid(field, format!("'{v}' appears more than once")));
        }
    }
    Ok(())
}
