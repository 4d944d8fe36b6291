//! Enumerated option values.

use std::fmt;
use std::str::FromStr;

/// What to do with quotes around a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteRule {
    #[default]
    Remove,
    Keep,
    Error,
}

impl QuoteRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remove => "remove",
            Self::Keep => "keep",
            Self::Error => "error",
        }
    }
}

impl FromStr for QuoteRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remove" => Ok(Self::Remove),
            "keep" => Ok(Self::Keep),
            "error" => Ok(Self::Error),
            _ => Err("expected one of 'remove', 'keep', 'error'".to_string()),
        }
    }
}

/// What to do with an empty field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyFieldRule {
    #[default]
    Missing,
    Error,
    Auto,
}

impl EmptyFieldRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Error => "error",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for EmptyFieldRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "missing" => Ok(Self::Missing),
            "error" => Ok(Self::Error),
            "auto" => Ok(Self::Auto),
            _ => Err("expected one of 'missing', 'error', 'auto'".to_string()),
        }
    }
}

/// Whitespace handling for text variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespaceRule {
    #[default]
    Trim,
    TrimLeading,
    TrimTrailing,
    Preserve,
}

impl WhitespaceRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trim => "trim",
            Self::TrimLeading => "trimleading",
            Self::TrimTrailing => "trimtrailing",
            Self::Preserve => "preserve",
        }
    }
}

impl FromStr for WhitespaceRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trim" => Ok(Self::Trim),
            "trimleading" => Ok(Self::TrimLeading),
            "trimtrailing" => Ok(Self::TrimTrailing),
            "preserve" => Ok(Self::Preserve),
            _ => Err(
                "expected one of 'trim', 'trimleading', 'trimtrailing', 'preserve'".to_string()
            ),
        }
    }
}

/// Radix numeric fields are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberSystem {
    #[default]
    Decimal,
    Hex,
    Binary,
}

impl NumberSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Hex => "hex",
            Self::Binary => "binary",
        }
    }
}

impl FromStr for NumberSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "decimal" => Ok(Self::Decimal),
            "hex" => Ok(Self::Hex),
            "binary" => Ok(Self::Binary),
            _ => Err("expected one of 'decimal', 'hex', 'binary'".to_string()),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(QuoteRule, EmptyFieldRule, WhitespaceRule, NumberSystem);
