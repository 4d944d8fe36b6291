//! Reading and writing options documents.
//!
//! A document lists the variables in order. Each entry carries `name` and
//! `type`; every other key is an option key (`fill_value`,
//! `decimal_separator`, ...) applied through the record's validated setters.
//!
//! ```yaml
//! variables:
//!   - name: Temp
//!     type: double
//!     fill_value: .nan
//!   - name: Station
//!     type: categorical
//!     categories: [north, south]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::arg::Arg;

use super::errors::DocumentError;
use super::import::ImportOptions;
use super::schema::{OptionField, VarType};
use super::variable::VariableOptions;

/// Serialization format of an options document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Toml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(DocumentError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OptionsDocument {
    #[serde(default)]
    variables: Vec<VariableEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct VariableEntry {
    name: String,
    #[serde(rename = "type")]
    var_type: String,
    #[serde(flatten)]
    options: BTreeMap<String, Arg>,
}

impl VariableEntry {
    fn from_variable(variable: &VariableOptions) -> Self {
        let options = variable
            .options()
            .into_iter()
            .filter(|(field, _)| *field != OptionField::Type)
            .map(|(field, value)| (field.key(), value))
            .collect();
        Self {
            name: variable.name().to_string(),
            var_type: variable.var_type().to_string(),
            options,
        }
    }

    fn into_variable(self) -> Result<VariableOptions, DocumentError> {
        let invalid = |source| DocumentError::Variable { variable: self.name.clone(), source };

        let var_type: VarType = self.var_type.parse().map_err(invalid)?;
        let mut variable = VariableOptions::new(&self.name, var_type).map_err(invalid)?;

        for (key, value) in &self.options {
            let field = match key.parse::<OptionField>() {
                Ok(OptionField::Name | OptionField::Type) | Err(_) => {
                    return Err(DocumentError::UnknownKey {
                        variable: self.name.clone(),
                        key: key.clone(),
                    });
                }
                Ok(field) => field,
            };
            variable.set_option(field, value).map_err(invalid)?;
        }
        variable.validate().map_err(invalid)?;
        Ok(variable)
    }
}

impl ImportOptions {
    /// Parse options from document text.
    pub fn from_document_str(s: &str, format: DocumentFormat) -> Result<Self, DocumentError> {
        let doc: OptionsDocument = match format {
            DocumentFormat::Yaml => serde_yaml::from_str(s)?,
            DocumentFormat::Toml => toml::from_str(s)?,
            DocumentFormat::Json => serde_json::from_str(s)?,
        };

        let variables = doc
            .variables
            .into_iter()
            .map(VariableEntry::into_variable)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(variables)?)
    }

    /// Render options as document text.
    pub fn to_document_string(&self, format: DocumentFormat) -> Result<String, DocumentError> {
        let doc = OptionsDocument {
            variables: self.variables().iter().map(VariableEntry::from_variable).collect(),
        };
        let s = match format {
            DocumentFormat::Yaml => serde_yaml::to_string(&doc)?,
            DocumentFormat::Toml => toml::to_string(&doc)?,
            DocumentFormat::Json => serde_json::to_string_pretty(&doc)?,
        };
        Ok(s)
    }

    /// Load options from a file; the extension selects the format.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let format = DocumentFormat::from_path(path)?;
        let s = fs::read_to_string(path)
            .map_err(|source| DocumentError::Read { path: path.to_path_buf(), source })?;
        let options = Self::from_document_str(&s, format)?;
        debug!(path = %path.display(), variables = options.len(), "loaded options document");
        Ok(options)
    }

    /// Write options to a file; the extension selects the format.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let format = DocumentFormat::from_path(path)?;
        let s = self.to_document_string(format)?;
        fs::write(path, s)
            .map_err(|source| DocumentError::Write { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), variables = self.len(), "saved options document");
        Ok(())
    }
}
