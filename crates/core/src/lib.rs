#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]

//! Per-variable import options for tabular data.
//!
//! An [`ImportOptions`] holds one [`VariableOptions`] record per column. The
//! [`setvaropts`] command resolves a selection of variables and assigns
//! option values onto every selected record, validating each assignment
//! against the record's data type.

pub mod arg;
pub mod config;
pub mod options;
pub mod selection;
pub mod setvaropts;

pub use arg::Arg;
pub use options::{ImportOptions, OptionField, VarType, VariableOptions};
pub use selection::{SelectionError, SelectionMask};
pub use setvaropts::{SetVarOpts, SetVarOptsError, set_var_opts};
