//! Per-variable import options.
//!
//! This module provides:
//! - [`VariableOptions`]: one record per variable with a validated name, a
//!   data type, a fill value and the options of the type's family
//! - [`ImportOptions`]: the ordered collection of records for a table
//! - Options documents in YAML, TOML or JSON
//!
//! Which options a record carries depends on its type. Records answer
//! [`VariableOptions::supports`] before anything is assigned, so an option
//! that does not apply is an ordinary error value.

mod convert;
pub mod document;
pub mod errors;
pub mod import;
pub mod kinds;
pub mod rules;
pub mod schema;
pub mod variable;

pub use document::DocumentFormat;
pub use errors::{DocumentError, NamesError, OptionError};
pub use import::ImportOptions;
pub use kinds::{
    CategoricalOptions, DatetimeOptions, DurationOptions, LogicalOptions, NumericOptions,
    TextOptions, TypedOptions, VariableKind,
};
pub use rules::{EmptyFieldRule, NumberSystem, QuoteRule, WhitespaceRule};
pub use schema::{OptionField, TypeFamily, VarType};
pub use variable::{CommonOptions, VariableOptions, is_valid_name};
