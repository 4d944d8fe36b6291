//! Error types for variable records and options documents.

use std::path::PathBuf;
use thiserror::Error;

use super::schema::{OptionField, VarType};
use crate::selection::SelectionError;

/// Errors raised by the validated setters of a variable record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionError {
    /// Name is not a valid identifier.
    #[error(
        "'{0}' is not a valid variable name: it must start with a letter, contain only letters, digits and underscores, be at most 63 characters and not be a keyword"
    )]
    InvalidName(String),

    /// Type name is not in the supported set.
    #[error("'{0}' is not a supported data type")]
    NotDataType(String),

    /// Value has the wrong shape or violates a constraint.
    #[error("invalid value for option '{field}': {message}")]
    InvalidValue { field: OptionField, message: String },

    /// Option does not exist on records of this type.
    #[error("option '{field}' is not available for variables of type '{var_type}'")]
    NotAvailable { field: OptionField, var_type: VarType },
}

impl OptionError {
    pub(crate) fn invalid(field: OptionField, message: impl Into<String>) -> Self {
        Self::InvalidValue { field, message: message.into() }
    }
}

/// Errors from renaming variables through the dedicated name path.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NamesError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Option(#[from] OptionError),

    /// One new name is needed per selected variable.
    #[error("{selected} variables selected but {given} names given")]
    NameCountMismatch { selected: usize, given: usize },

    /// Variable names must be unique within the options.
    #[error("duplicate variable name: {0}")]
    DuplicateVariableName(String),
}

/// Errors loading or saving an options document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read options document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write options document {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported options document format: {0} (expected .yaml, .yml, .toml or .json)")]
    UnsupportedFormat(String),

    #[error("failed to parse YAML options: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse TOML options: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML options: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("failed to parse JSON options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown option key '{key}' for variable '{variable}'")]
    UnknownKey { variable: String, key: String },

    #[error("invalid options for variable '{variable}': {source}")]
    Variable {
        variable: String,
        #[source]
        source: OptionError,
    },

    #[error(transparent)]
    Names(#[from] NamesError),
}
