//! Per-variable option records.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::arg::Arg;

use super::convert;
use super::errors::OptionError;
use super::kinds::{TypedOptions, VariableKind};
use super::rules::{EmptyFieldRule, QuoteRule};
use super::schema::{OptionField, VarType};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]{0,62}$").expect("valid regex"));

const KEYWORDS: &[&str] = &[
    "break", "case", "catch", "classdef", "continue", "else", "elseif", "end", "for",
    "function", "global", "if", "otherwise", "parfor", "persistent", "return", "spmd",
    "switch", "try", "while",
];

/// Whether `name` may be used as a variable name.
pub fn is_valid_name(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !KEYWORDS.contains(&name)
}

/// Options every record carries regardless of type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CommonOptions {
    pub treat_as_missing: Vec<String>,
    pub quote_rule: QuoteRule,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub empty_field_rule: EmptyFieldRule,
}

impl CommonOptions {
    fn get(&self, field: OptionField) -> Option<Arg> {
        let value = match field {
            OptionField::TreatAsMissing => Arg::Texts(self.treat_as_missing.clone()),
            OptionField::QuoteRule => Arg::from(self.quote_rule.as_str()),
            OptionField::Prefixes => Arg::Texts(self.prefixes.clone()),
            OptionField::Suffixes => Arg::Texts(self.suffixes.clone()),
            OptionField::EmptyFieldRule => Arg::from(self.empty_field_rule.as_str()),
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, field: OptionField, value: &Arg) -> Result<(), OptionError> {
        match field {
            OptionField::TreatAsMissing => self.treat_as_missing = convert::texts(field, value)?,
            OptionField::QuoteRule => self.quote_rule = convert::choice(field, value)?,
            OptionField::Prefixes => self.prefixes = convert::texts(field, value)?,
            OptionField::Suffixes => self.suffixes = convert::texts(field, value)?,
            OptionField::EmptyFieldRule => self.empty_field_rule = convert::choice(field, value)?,
            _ => unreachable!("{field} is not a common option"),
        }
        Ok(())
    }
}

/// Import options for a single variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableOptions {
    name: String,
    common: CommonOptions,
    kind: VariableKind,
}

impl VariableOptions {
    /// Create a record with the default options of `var_type`.
    pub fn new(name: &str, var_type: VarType) -> Result<Self, OptionError> {
        let mut record = Self {
            name: String::new(),
            common: CommonOptions::default(),
            kind: VariableKind::for_type(var_type),
        };
        record.set_name(name)?;
        Ok(record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) -> Result<(), OptionError> {
        if !is_valid_name(name) {
            return Err(OptionError::InvalidName(name.to_string()));
        }
        self.name = name.to_string();
        Ok(())
    }

    pub fn var_type(&self) -> VarType {
        self.kind.typed().var_type()
    }

    /// Change the data type.
    ///
    /// Within a family only the type changes. Across families the
    /// type-specific options and fill value reset to the new type's defaults;
    /// the name and common options are kept.
    pub fn set_type(&mut self, var_type: VarType) {
        if self.kind.family() == var_type.family() {
            self.kind.typed_mut().set_var_type(var_type);
        } else {
            debug!(
                variable = %self.name,
                from = %self.var_type(),
                to = %var_type,
                "converting variable options to a new type family"
            );
            self.kind = VariableKind::for_type(var_type);
        }
    }

    pub fn fill_value(&self) -> Arg {
        self.kind.typed().fill_value()
    }

    pub fn common(&self) -> &CommonOptions {
        &self.common
    }

    /// Check constraints between options, such as distinct separators or
    /// disjoint true and false symbols. Setters check single values only, so
    /// run this after a batch of assignments.
    pub fn validate(&self) -> Result<(), OptionError> {
        self.kind.typed().check()
    }

    /// Whether `field` can be assigned on a record of this type.
    pub fn supports(&self, field: OptionField) -> bool {
        field.is_common() || self.kind.typed().supports(field)
    }

    /// Read an option. `None` if this record's type lacks it.
    pub fn option(&self, field: OptionField) -> Option<Arg> {
        match field {
            OptionField::Name => Some(Arg::Text(self.name.clone())),
            OptionField::Type => Some(Arg::from(self.var_type().as_str())),
            OptionField::FillValue => Some(self.fill_value()),
            f if f.is_common() => self.common.get(f),
            f => self.kind.typed().get(f),
        }
    }

    /// Assign an option through its validated setter.
    pub fn set_option(&mut self, field: OptionField, value: &Arg) -> Result<(), OptionError> {
        match field {
            OptionField::Name => {
                let name = match value {
                    Arg::Text(s) => s.clone(),
                    _ => {
                        return Err(OptionError::invalid(
                            field,
                            format!("expected text, got {}", value.shape()),
                        ));
                    }
                };
                self.set_name(&name)
            }
            OptionField::Type => {
                let name = match value {
                    Arg::Text(s) => s,
                    _ => return Err(OptionError::NotDataType(value.to_string())),
                };
                self.set_type(name.parse()?);
                Ok(())
            }
            OptionField::FillValue => self.kind.typed_mut().set_fill_value(value),
            f if f.is_common() => self.common.set(f, value),
            f => self.kind.typed_mut().set(f, value),
        }
    }

    /// Every option of this record except its name, in display order.
    pub fn options(&self) -> Vec<(OptionField, Arg)> {
        OptionField::ALL
            .into_iter()
            .filter(|f| *f != OptionField::Name)
            .filter_map(|f| self.option(f).map(|v| (f, v)))
            .collect()
    }
}
