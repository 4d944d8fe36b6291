//! Error types for the setvaropts command.

use thiserror::Error;

use crate::options::{OptionError, OptionField};
use crate::selection::SelectionError;

/// Errors from validating or executing a setvaropts invocation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetVarOptsError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Option(#[from] OptionError),

    /// The field has its own dedicated setter.
    #[error("'{field}' cannot be set with setvaropts; use {path} instead")]
    SetThroughPropertyOnly { field: OptionField, path: &'static str },

    /// Last option name has no value after it.
    #[error("missing value for option '{0}'")]
    MissingOptionValue(String),

    /// An option name position holds something other than text.
    #[error("option names must be text")]
    ParamMustBeName,

    #[error("'{0}' is not a recognized option")]
    UnknownOption(String),

    /// The first option applied does not exist for a selected variable's type.
    #[error("option '{0}' is not available for the type of every selected variable")]
    OptionNotAvailableForType(OptionField),

    /// A later option does not exist for a selected variable's type.
    #[error(
        "no value applies for option '{0}': it is not available for the type of every selected variable"
    )]
    NoValueForNamedOrNumbered(OptionField),
}
