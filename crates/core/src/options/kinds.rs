//! Type-specific option sets.
//!
//! Each [`TypeFamily`] has one options struct implementing [`TypedOptions`].
//! The struct answers which options it carries, validates fill values for its
//! types and reads them back converted to the declared type.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::arg::Arg;

use super::convert;
use super::errors::OptionError;
use super::rules::{NumberSystem, WhitespaceRule};
use super::schema::{OptionField, TypeFamily, VarType};

/// Behaviour shared by every type-specific option set.
pub trait TypedOptions {
    fn var_type(&self) -> VarType;

    /// Change the type within the same family.
    fn set_var_type(&mut self, var_type: VarType);

    /// Fill value converted to the declared type.
    fn fill_value(&self) -> Arg;

    fn set_fill_value(&mut self, value: &Arg) -> Result<(), OptionError>;

    /// Type-specific options carried, in display order.
    fn fields(&self) -> &'static [OptionField];

    /// Read a type-specific option. `None` if this kind lacks it.
    fn get(&self, field: OptionField) -> Option<Arg>;

    /// Assign a type-specific option. Constraints spanning several options
    /// are left to [`TypedOptions::check`].
    fn set(&mut self, field: OptionField, value: &Arg) -> Result<(), OptionError>;

    /// Check constraints between options once all of them are assigned.
    fn check(&self) -> Result<(), OptionError> {
        Ok(())
    }

    fn supports(&self, field: OptionField) -> bool {
        self.fields().contains(&field)
    }

    fn not_available(&self, field: OptionField) -> OptionError {
        OptionError::NotAvailable { field, var_type: self.var_type() }
    }
}

/// Options for `char` and `string` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    var_type: VarType,
    fill_value: String,
    whitespace_rule: WhitespaceRule,
}

impl TextOptions {
    pub fn new(var_type: VarType) -> Self {
        Self { var_type, fill_value: String::new(), whitespace_rule: WhitespaceRule::default() }
    }
}

impl TypedOptions for TextOptions {
    fn var_type(&self) -> VarType {
        self.var_type
    }

    fn set_var_type(&mut self, var_type: VarType) {
        self.var_type = var_type;
    }

    fn fill_value(&self) -> Arg {
        Arg::Text(self.fill_value.clone())
    }

    fn set_fill_value(&mut self, value: &Arg) -> Result<(), OptionError> {
        self.fill_value = convert::text(OptionField::FillValue, value)?;
        Ok(())
    }

    fn fields(&self) -> &'static [OptionField] {
        &[OptionField::WhitespaceRule]
    }

    fn get(&self, field: OptionField) -> Option<Arg> {
        match field {
            OptionField::WhitespaceRule => Some(Arg::from(self.whitespace_rule.as_str())),
            _ => None,
        }
    }

    fn set(&mut self, field: OptionField, value: &Arg) -> Result<(), OptionError> {
        match field {
            OptionField::WhitespaceRule => self.whitespace_rule = convert::choice(field, value)?,
            _ => return Err(self.not_available(field)),
        }
        Ok(())
    }
}

/// Options for floating point and integer variables.
#[derive(Debug, Clone)]
pub struct NumericOptions {
    var_type: VarType,
    fill_value: f64,
    decimal_separator: char,
    thousands_separator: Option<char>,
    trim_non_numeric: bool,
    exponent_character: String,
    number_system: NumberSystem,
}

impl NumericOptions {
    pub fn new(var_type: VarType) -> Self {
        Self {
            var_type,
            fill_value: f64::NAN,
            decimal_separator: '.',
            thousands_separator: None,
            trim_non_numeric: false,
            exponent_character: "eEdD".to_string(),
            number_system: NumberSystem::default(),
        }
    }

    /// Fill value as the declared type would hold it: rounded and saturated
    /// for integers (NaN becomes 0), single precision for `single`.
    pub fn converted_fill_value(&self) -> f64 {
        let v = self.fill_value;
        match self.var_type.integer_bounds() {
            Some(_) if v.is_nan() => 0.0,
            Some((lo, hi)) => v.round().clamp(lo, hi),
            None if self.var_type == VarType::Single => f64::from(v as f32),
            None => v,
        }
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }
}

// NaN fill values compare equal
impl PartialEq for NumericOptions {
    fn eq(&self, other: &Self) -> bool {
        let same_fill = self.fill_value == other.fill_value
            || (self.fill_value.is_nan() && other.fill_value.is_nan());
        same_fill
            && self.var_type == other.var_type
            && self.decimal_separator == other.decimal_separator
            && self.thousands_separator == other.thousands_separator
            && self.trim_non_numeric == other.trim_non_numeric
            && self.exponent_character == other.exponent_character
            && self.number_system == other.number_system
    }
}

impl TypedOptions for NumericOptions {
    fn var_type(&self) -> VarType {
        self.var_type
    }

    fn set_var_type(&mut self, var_type: VarType) {
        self.var_type = var_type;
    }

    fn fill_value(&self) -> Arg {
        Arg::Number(self.converted_fill_value())
    }

    fn set_fill_value(&mut self, value: &Arg) -> Result<(), OptionError> {
        // JSON writes NaN as null
        self.fill_value = match value {
            Arg::Empty => f64::NAN,
            other => convert::number(OptionField::FillValue, other)?,
        };
        Ok(())
    }

    fn fields(&self) -> &'static [OptionField] {
        &[
            OptionField::DecimalSeparator,
            OptionField::ThousandsSeparator,
            OptionField::TrimNonNumeric,
            OptionField::ExponentCharacter,
            OptionField::NumberSystem,
        ]
    }

    fn get(&self, field: OptionField) -> Option<Arg> {
        let value = match field {
            OptionField::DecimalSeparator => Arg::Text(self.decimal_separator.to_string()),
            OptionField::ThousandsSeparator => {
                Arg::Text(self.thousands_separator.map(String::from).unwrap_or_default())
            }
            OptionField::TrimNonNumeric => Arg::Logical(self.trim_non_numeric),
            OptionField::ExponentCharacter => Arg::Text(self.exponent_character.clone()),
            OptionField::NumberSystem => Arg::from(self.number_system.as_str()),
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, field: OptionField, value: &Arg) -> Result<(), OptionError> {
        match field {
            OptionField::DecimalSeparator => {
                self.decimal_separator = convert::single_char(field, value)?;
            }
            OptionField::ThousandsSeparator => {
                self.thousands_separator = match convert::text(field, value)?.as_str() {
                    "" => None,
                    _ => Some(convert::single_char(field, value)?),
                };
            }
            OptionField::TrimNonNumeric => self.trim_non_numeric = convert::logical(field, value)?,
            OptionField::ExponentCharacter => {
                let s = convert::text(field, value)?;
                if s.is_empty() || s.chars().any(|c| !c.is_ascii_alphabetic()) {
                    return Err(OptionError::invalid(field, "expected one or more letters"));
                }
                self.exponent_character = s;
            }
            OptionField::NumberSystem => self.number_system = convert::choice(field, value)?,
            _ => return Err(self.not_available(field)),
        }
        Ok(())
    }

    fn check(&self) -> Result<(), OptionError> {
        if self.thousands_separator == Some(self.decimal_separator) {
            return Err(OptionError::invalid(
                OptionField::ThousandsSeparator,
                "must differ from the decimal separator",
            ));
        }
        Ok(())
    }
}

/// Options for `logical` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalOptions {
    fill_value: bool,
    true_symbols: Vec<String>,
    false_symbols: Vec<String>,
    case_sensitive: bool,
}

impl Default for LogicalOptions {
    fn default() -> Self {
        Self {
            fill_value: false,
            true_symbols: vec!["true".into(), "t".into(), "1".into()],
            false_symbols: vec!["false".into(), "f".into(), "0".into()],
            case_sensitive: false,
        }
    }
}

impl LogicalOptions {
    pub fn true_symbols(&self) -> &[String] {
        &self.true_symbols
    }

    pub fn false_symbols(&self) -> &[String] {
        &self.false_symbols
    }

    fn symbols(field: OptionField, value: &Arg) -> Result<Vec<String>, OptionError> {
        let symbols = convert::texts(field, value)?;
        if symbols.is_empty() {
            return Err(OptionError::invalid(field, "at least one symbol is required"));
        }
        Ok(symbols)
    }
}

impl TypedOptions for LogicalOptions {
    fn var_type(&self) -> VarType {
        VarType::Logical
    }

    fn set_var_type(&mut self, _var_type: VarType) {}

    fn fill_value(&self) -> Arg {
        Arg::Logical(self.fill_value)
    }

    fn set_fill_value(&mut self, value: &Arg) -> Result<(), OptionError> {
        self.fill_value = convert::logical(OptionField::FillValue, value)?;
        Ok(())
    }

    fn fields(&self) -> &'static [OptionField] {
        &[OptionField::TrueSymbols, OptionField::FalseSymbols, OptionField::CaseSensitive]
    }

    fn get(&self, field: OptionField) -> Option<Arg> {
        match field {
            OptionField::TrueSymbols => Some(Arg::Texts(self.true_symbols.clone())),
            OptionField::FalseSymbols => Some(Arg::Texts(self.false_symbols.clone())),
            OptionField::CaseSensitive => Some(Arg::Logical(self.case_sensitive)),
            _ => None,
        }
    }

    fn set(&mut self, field: OptionField, value: &Arg) -> Result<(), OptionError> {
        match field {
            OptionField::TrueSymbols => {
                self.true_symbols = Self::symbols(field, value)?;
            }
            OptionField::FalseSymbols => {
                self.false_symbols = Self::symbols(field, value)?;
            }
            OptionField::CaseSensitive => self.case_sensitive = convert::logical(field, value)?,
            _ => return Err(self.not_available(field)),
        }
        Ok(())
    }

    fn check(&self) -> Result<(), OptionError> {
        if let Some(clash) = self.true_symbols.iter().find(|s| self.false_symbols.contains(s)) {
            return Err(OptionError::invalid(
                OptionField::TrueSymbols,
                format!("'{clash}' cannot be both a true and a false symbol"),
            ));
        }
        Ok(())
    }
}

/// Options for `datetime` variables. A `None` fill value is NaT.
#[derive(Debug, Clone, PartialEq)]
pub struct DatetimeOptions {
    fill_value: Option<NaiveDateTime>,
    input_format: String,
    datetime_format: String,
    datetime_locale: String,
    time_zone: String,
}

impl Default for DatetimeOptions {
    fn default() -> Self {
        Self {
            fill_value: None,
            input_format: String::new(),
            datetime_format: "default".to_string(),
            datetime_locale: "en_US".to_string(),
            time_zone: String::new(),
        }
    }
}

impl DatetimeOptions {
    pub fn fill_datetime(&self) -> Option<NaiveDateTime> {
        self.fill_value
    }
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn format_datetime(dt: &NaiveDateTime) -> String {
    if dt.nanosecond() == 0 {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%d %H:%M:%S%.f").to_string()
    }
}

impl TypedOptions for DatetimeOptions {
    fn var_type(&self) -> VarType {
        VarType::Datetime
    }

    fn set_var_type(&mut self, _var_type: VarType) {}

    fn fill_value(&self) -> Arg {
        match &self.fill_value {
            Some(dt) => Arg::Text(format_datetime(dt)),
            None => Arg::from("NaT"),
        }
    }

    fn set_fill_value(&mut self, value: &Arg) -> Result<(), OptionError> {
        let s = convert::text(OptionField::FillValue, value)?;
        self.fill_value = if s.is_empty() || s.eq_ignore_ascii_case("nat") {
            None
        } else {
            Some(parse_datetime(&s).ok_or_else(|| {
                OptionError::invalid(
                    OptionField::FillValue,
                    format!(
                        "'{s}' is not 'NaT' or a date/time such as 2024-01-31 \
                         or 2024-01-31 12:00:00"
                    ),
                )
            })?)
        };
        Ok(())
    }

    fn fields(&self) -> &'static [OptionField] {
        &[
            OptionField::InputFormat,
            OptionField::DatetimeFormat,
            OptionField::DatetimeLocale,
            OptionField::TimeZone,
        ]
    }

    fn get(&self, field: OptionField) -> Option<Arg> {
        let s = match field {
            OptionField::InputFormat => &self.input_format,
            OptionField::DatetimeFormat => &self.datetime_format,
            OptionField::DatetimeLocale => &self.datetime_locale,
            OptionField::TimeZone => &self.time_zone,
            _ => return None,
        };
        Some(Arg::Text(s.clone()))
    }

    fn set(&mut self, field: OptionField, value: &Arg) -> Result<(), OptionError> {
        let target = match field {
            OptionField::InputFormat => &mut self.input_format,
            OptionField::DatetimeFormat => &mut self.datetime_format,
            OptionField::DatetimeLocale => &mut self.datetime_locale,
            OptionField::TimeZone => &mut self.time_zone,
            _ => return Err(self.not_available(field)),
        };
        *target = convert::text(field, value)?;
        Ok(())
    }
}

/// Options for `duration` variables. A `None` fill value is NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationOptions {
    fill_value: Option<TimeDelta>,
    input_format: String,
    duration_format: String,
    decimal_separator: char,
    field_separator: char,
}

impl Default for DurationOptions {
    fn default() -> Self {
        Self {
            fill_value: None,
            input_format: String::new(),
            duration_format: "default".to_string(),
            decimal_separator: '.',
            field_separator: ':',
        }
    }
}

impl DurationOptions {
    pub fn fill_duration(&self) -> Option<TimeDelta> {
        self.fill_value
    }
}

fn duration_from_seconds(secs: f64) -> Option<TimeDelta> {
    let millis = (secs * 1000.0).round();
    if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
        return None;
    }
    TimeDelta::try_milliseconds(millis as i64)
}

/// Parse `hh:mm:ss[.fff]`.
fn parse_clock(s: &str) -> Option<TimeDelta> {
    let mut parts = s.split(':');
    let (h, m, sec) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    let sec: f64 = sec.parse().ok()?;
    if m >= 60 || !(0.0..60.0).contains(&sec) {
        return None;
    }
    duration_from_seconds(f64::from(h) * 3600.0 + f64::from(m) * 60.0 + sec)
}

impl TypedOptions for DurationOptions {
    fn var_type(&self) -> VarType {
        VarType::Duration
    }

    fn set_var_type(&mut self, _var_type: VarType) {}

    fn fill_value(&self) -> Arg {
        match self.fill_value {
            Some(d) => Arg::Number(d.num_milliseconds() as f64 / 1000.0),
            None => Arg::Number(f64::NAN),
        }
    }

    fn set_fill_value(&mut self, value: &Arg) -> Result<(), OptionError> {
        let field = OptionField::FillValue;
        self.fill_value = match value {
            Arg::Empty => None,
            Arg::Number(n) if n.is_nan() => None,
            Arg::Number(n) => Some(
                duration_from_seconds(*n)
                    .ok_or_else(|| OptionError::invalid(field, "duration is out of range"))?,
            ),
            Arg::Text(s) if s.eq_ignore_ascii_case("nan") => None,
            Arg::Text(s) => Some(parse_clock(s).ok_or_else(|| {
                OptionError::invalid(field, format!("'{s}' is not a duration in hh:mm:ss form"))
            })?),
            other => {
                return Err(OptionError::invalid(
                    field,
                    format!("expected seconds or hh:mm:ss text, got {}", other.shape()),
                ));
            }
        };
        Ok(())
    }

    fn fields(&self) -> &'static [OptionField] {
        &[
            OptionField::InputFormat,
            OptionField::DurationFormat,
            OptionField::DecimalSeparator,
            OptionField::FieldSeparator,
        ]
    }

    fn get(&self, field: OptionField) -> Option<Arg> {
        let value = match field {
            OptionField::InputFormat => Arg::Text(self.input_format.clone()),
            OptionField::DurationFormat => Arg::Text(self.duration_format.clone()),
            OptionField::DecimalSeparator => Arg::Text(self.decimal_separator.to_string()),
            OptionField::FieldSeparator => Arg::Text(self.field_separator.to_string()),
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, field: OptionField, value: &Arg) -> Result<(), OptionError> {
        match field {
            OptionField::InputFormat => self.input_format = convert::text(field, value)?,
            OptionField::DurationFormat => self.duration_format = convert::text(field, value)?,
            OptionField::DecimalSeparator => {
                self.decimal_separator = convert::single_char(field, value)?;
            }
            OptionField::FieldSeparator => {
                self.field_separator = convert::single_char(field, value)?;
            }
            _ => return Err(self.not_available(field)),
        }
        Ok(())
    }
}

/// Options for `categorical` variables. An empty fill value is undefined.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoricalOptions {
    fill_value: String,
    categories: Vec<String>,
    protected: bool,
    ordered: bool,
}

impl CategoricalOptions {
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl TypedOptions for CategoricalOptions {
    fn var_type(&self) -> VarType {
        VarType::Categorical
    }

    fn set_var_type(&mut self, _var_type: VarType) {}

    fn fill_value(&self) -> Arg {
        Arg::Text(self.fill_value.clone())
    }

    fn set_fill_value(&mut self, value: &Arg) -> Result<(), OptionError> {
        self.fill_value = convert::text(OptionField::FillValue, value)?;
        Ok(())
    }

    fn fields(&self) -> &'static [OptionField] {
        &[OptionField::Categories, OptionField::Protected, OptionField::Ordered]
    }

    fn get(&self, field: OptionField) -> Option<Arg> {
        match field {
            OptionField::Categories => Some(Arg::Texts(self.categories.clone())),
            OptionField::Protected => Some(Arg::Logical(self.protected)),
            OptionField::Ordered => Some(Arg::Logical(self.ordered)),
            _ => None,
        }
    }

    fn set(&mut self, field: OptionField, value: &Arg) -> Result<(), OptionError> {
        match field {
            OptionField::Categories => {
                let categories = convert::texts(field, value)?;
                convert::unique(field, &categories)?;
                self.categories = categories;
            }
            OptionField::Protected => self.protected = convert::logical(field, value)?,
            OptionField::Ordered => self.ordered = convert::logical(field, value)?,
            _ => return Err(self.not_available(field)),
        }
        Ok(())
    }
}

/// The type-specific part of a variable record.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableKind {
    Text(TextOptions),
    Numeric(NumericOptions),
    Logical(LogicalOptions),
    Datetime(DatetimeOptions),
    Duration(DurationOptions),
    Categorical(CategoricalOptions),
}

impl VariableKind {
    /// Default options for a freshly typed record.
    pub fn for_type(var_type: VarType) -> Self {
        match var_type.family() {
            TypeFamily::Text => Self::Text(TextOptions::new(var_type)),
            TypeFamily::Numeric => Self::Numeric(NumericOptions::new(var_type)),
            TypeFamily::Logical => Self::Logical(LogicalOptions::default()),
            TypeFamily::Datetime => Self::Datetime(DatetimeOptions::default()),
            TypeFamily::Duration => Self::Duration(DurationOptions::default()),
            TypeFamily::Categorical => Self::Categorical(CategoricalOptions::default()),
        }
    }

    pub fn family(&self) -> TypeFamily {
        match self {
            Self::Text(_) => TypeFamily::Text,
            Self::Numeric(_) => TypeFamily::Numeric,
            Self::Logical(_) => TypeFamily::Logical,
            Self::Datetime(_) => TypeFamily::Datetime,
            Self::Duration(_) => TypeFamily::Duration,
            Self::Categorical(_) => TypeFamily::Categorical,
        }
    }

    pub fn typed(&self) -> &dyn TypedOptions {
        match self {
            Self::Text(o) => o,
            Self::Numeric(o) => o,
            Self::Logical(o) => o,
            Self::Datetime(o) => o,
            Self::Duration(o) => o,
            Self::Categorical(o) => o,
        }
    }

    pub fn typed_mut(&mut self) -> &mut dyn TypedOptions {
        match self {
            Self::Text(o) => o,
            Self::Numeric(o) => o,
            Self::Logical(o) => o,
            Self::Datetime(o) => o,
            Self::Duration(o) => o,
            Self::Categorical(o) => o,
        }
    }
}
