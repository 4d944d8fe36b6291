//! Data types and option names.

use serde::{Deserialize, Serialize};

use super::errors::OptionError;

/// Data type a variable is imported as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarType {
    Char,
    String,
    Double,
    Single,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Logical,
    Datetime,
    Duration,
    Categorical,
}

impl VarType {
    /// Every supported type, in display order.
    pub const ALL: [VarType; 16] = [
        Self::Char,
        Self::String,
        Self::Double,
        Self::Single,
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Uint8,
        Self::Uint16,
        Self::Uint32,
        Self::Uint64,
        Self::Logical,
        Self::Datetime,
        Self::Duration,
        Self::Categorical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::String => "string",
            Self::Double => "double",
            Self::Single => "single",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Logical => "logical",
            Self::Datetime => "datetime",
            Self::Duration => "duration",
            Self::Categorical => "categorical",
        }
    }

    /// The family whose type-specific options this type uses.
    pub fn family(&self) -> TypeFamily {
        match self {
            Self::Char | Self::String => TypeFamily::Text,
            Self::Double
            | Self::Single
            | Self::Int8
            | Self::Int16
            | Self::Int32
            | Self::Int64
            | Self::Uint8
            | Self::Uint16
            | Self::Uint32
            | Self::Uint64 => TypeFamily::Numeric,
            Self::Logical => TypeFamily::Logical,
            Self::Datetime => TypeFamily::Datetime,
            Self::Duration => TypeFamily::Duration,
            Self::Categorical => TypeFamily::Categorical,
        }
    }

    /// Inclusive value range of integer types; `None` for everything else.
    pub fn integer_bounds(&self) -> Option<(f64, f64)> {
        match self {
            Self::Int8 => Some((f64::from(i8::MIN), f64::from(i8::MAX))),
            Self::Int16 => Some((f64::from(i16::MIN), f64::from(i16::MAX))),
            Self::Int32 => Some((f64::from(i32::MIN), f64::from(i32::MAX))),
            Self::Int64 => Some((i64::MIN as f64, i64::MAX as f64)),
            Self::Uint8 => Some((0.0, f64::from(u8::MAX))),
            Self::Uint16 => Some((0.0, f64::from(u16::MAX))),
            Self::Uint32 => Some((0.0, f64::from(u32::MAX))),
            Self::Uint64 => Some((0.0, u64::MAX as f64)),
            _ => None,
        }
    }
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for VarType {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| OptionError::NotDataType(s.to_string()))
    }
}

/// Group of types sharing one set of type-specific options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    Text,
    Numeric,
    Logical,
    Datetime,
    Duration,
    Categorical,
}

impl TypeFamily {
    /// Type a record gets when it is created for this family.
    pub fn default_type(&self) -> VarType {
        match self {
            Self::Text => VarType::Char,
            Self::Numeric => VarType::Double,
            Self::Logical => VarType::Logical,
            Self::Datetime => VarType::Datetime,
            Self::Duration => VarType::Duration,
            Self::Categorical => VarType::Categorical,
        }
    }
}

/// Name of a settable option on a variable record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionField {
    Name,
    Type,
    FillValue,
    TreatAsMissing,
    QuoteRule,
    Prefixes,
    Suffixes,
    EmptyFieldRule,
    WhitespaceRule,
    DecimalSeparator,
    ThousandsSeparator,
    TrimNonNumeric,
    ExponentCharacter,
    NumberSystem,
    TrueSymbols,
    FalseSymbols,
    CaseSensitive,
    InputFormat,
    DatetimeFormat,
    DatetimeLocale,
    TimeZone,
    DurationFormat,
    FieldSeparator,
    Categories,
    Protected,
    Ordered,
}

impl OptionField {
    pub const ALL: [OptionField; 26] = [
        Self::Name,
        Self::Type,
        Self::FillValue,
        Self::TreatAsMissing,
        Self::QuoteRule,
        Self::Prefixes,
        Self::Suffixes,
        Self::EmptyFieldRule,
        Self::WhitespaceRule,
        Self::DecimalSeparator,
        Self::ThousandsSeparator,
        Self::TrimNonNumeric,
        Self::ExponentCharacter,
        Self::NumberSystem,
        Self::TrueSymbols,
        Self::FalseSymbols,
        Self::CaseSensitive,
        Self::InputFormat,
        Self::DatetimeFormat,
        Self::DatetimeLocale,
        Self::TimeZone,
        Self::DurationFormat,
        Self::FieldSeparator,
        Self::Categories,
        Self::Protected,
        Self::Ordered,
    ];

    /// Name used on the name/value path, e.g. `FillValue`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Type => "Type",
            Self::FillValue => "FillValue",
            Self::TreatAsMissing => "TreatAsMissing",
            Self::QuoteRule => "QuoteRule",
            Self::Prefixes => "Prefixes",
            Self::Suffixes => "Suffixes",
            Self::EmptyFieldRule => "EmptyFieldRule",
            Self::WhitespaceRule => "WhitespaceRule",
            Self::DecimalSeparator => "DecimalSeparator",
            Self::ThousandsSeparator => "ThousandsSeparator",
            Self::TrimNonNumeric => "TrimNonNumeric",
            Self::ExponentCharacter => "ExponentCharacter",
            Self::NumberSystem => "NumberSystem",
            Self::TrueSymbols => "TrueSymbols",
            Self::FalseSymbols => "FalseSymbols",
            Self::CaseSensitive => "CaseSensitive",
            Self::InputFormat => "InputFormat",
            Self::DatetimeFormat => "DatetimeFormat",
            Self::DatetimeLocale => "DatetimeLocale",
            Self::TimeZone => "TimeZone",
            Self::DurationFormat => "DurationFormat",
            Self::FieldSeparator => "FieldSeparator",
            Self::Categories => "Categories",
            Self::Protected => "Protected",
            Self::Ordered => "Ordered",
        }
    }

    /// Key used in options documents, e.g. `fill_value`.
    pub fn key(&self) -> String {
        let mut key = String::new();
        for (i, c) in self.as_str().chars().enumerate() {
            if c.is_ascii_uppercase() {
                if i > 0 {
                    key.push('_');
                }
                key.push(c.to_ascii_lowercase());
            } else {
                key.push(c);
            }
        }
        key
    }

    /// Whether every record carries this option regardless of type.
    pub fn is_common(&self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::Type
                | Self::FillValue
                | Self::TreatAsMissing
                | Self::QuoteRule
                | Self::Prefixes
                | Self::Suffixes
                | Self::EmptyFieldRule
        )
    }
}

impl std::fmt::Display for OptionField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OptionField {
    type Err = String;

    /// Accepts `FillValue`, `fillvalue` and `fill_value` alike.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_').collect::<String>().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().to_lowercase() == wanted)
            .ok_or_else(|| format!("unknown option: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_type_from_str() {
        assert_eq!("double".parse::<VarType>().unwrap(), VarType::Double);
        assert_eq!("UINT16".parse::<VarType>().unwrap(), VarType::Uint16);
        assert_eq!("Categorical".parse::<VarType>().unwrap(), VarType::Categorical);
        assert!(matches!("float".parse::<VarType>(), Err(OptionError::NotDataType(_))));
    }

    #[test]
    fn test_var_type_family() {
        assert_eq!(VarType::String.family(), TypeFamily::Text);
        assert_eq!(VarType::Int64.family(), TypeFamily::Numeric);
        assert_eq!(VarType::Logical.family(), TypeFamily::Logical);
        assert_eq!(TypeFamily::Numeric.default_type(), VarType::Double);
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(VarType::Int8.integer_bounds(), Some((-128.0, 127.0)));
        assert_eq!(VarType::Uint8.integer_bounds(), Some((0.0, 255.0)));
        assert_eq!(VarType::Double.integer_bounds(), None);
    }

    #[test]
    fn test_var_type_serde_names() {
        assert_eq!(serde_yaml::to_string(&VarType::Uint32).unwrap().trim(), "uint32");
        let t: VarType = serde_yaml::from_str("datetime").unwrap();
        assert_eq!(t, VarType::Datetime);
    }

    #[test]
    fn test_option_field_key() {
        assert_eq!(OptionField::FillValue.key(), "fill_value");
        assert_eq!(OptionField::Name.key(), "name");
        assert_eq!(OptionField::TrimNonNumeric.key(), "trim_non_numeric");
    }

    #[test]
    fn test_option_field_from_str() {
        assert_eq!("FillValue".parse::<OptionField>().unwrap(), OptionField::FillValue);
        assert_eq!("fillvalue".parse::<OptionField>().unwrap(), OptionField::FillValue);
        assert_eq!("fill_value".parse::<OptionField>().unwrap(), OptionField::FillValue);
        assert_eq!("TYPE".parse::<OptionField>().unwrap(), OptionField::Type);
        assert!("Colour".parse::<OptionField>().is_err());
    }

    #[test]
    fn test_every_key_parses_back() {
        for field in OptionField::ALL {
            assert_eq!(field.key().parse::<OptionField>().unwrap(), field);
        }
    }
}
