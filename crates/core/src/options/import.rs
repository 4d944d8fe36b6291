//! The options collection for a whole table.

use tracing::debug;

use crate::arg::Arg;
use crate::selection;

use super::errors::{NamesError, OptionError};
use super::variable::{VariableOptions, is_valid_name};

/// Ordered per-variable options describing how to import a table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImportOptions {
    variables: Vec<VariableOptions>,
}

impl ImportOptions {
    /// Create options from records. Variable names must be unique.
    pub fn new(variables: Vec<VariableOptions>) -> Result<Self, NamesError> {
        check_unique(variables.iter().map(VariableOptions::name))?;
        Ok(Self { variables })
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn variable_names(&self) -> Vec<String> {
        self.variables.iter().map(|v| v.name().to_string()).collect()
    }

    pub fn variables(&self) -> &[VariableOptions] {
        &self.variables
    }

    /// Look up a record by exact name.
    pub fn variable(&self, name: &str) -> Option<&VariableOptions> {
        self.variables.iter().find(|v| v.name() == name)
    }

    pub(crate) fn variables_mut(&mut self) -> &mut [VariableOptions] {
        &mut self.variables
    }

    /// Rename the selected variables.
    ///
    /// This is the only path for changing names. `selection` accepts every
    /// form [`selection::resolve`] does; one new name is needed per selected
    /// variable, in variable order. Nothing changes unless every name is
    /// valid and the resulting names are unique.
    pub fn set_variable_names(
        &mut self,
        selection: &Arg,
        names: &[String],
    ) -> Result<(), NamesError> {
        let mask = selection::resolve(&self.variable_names(), selection)?;
        let selected: Vec<usize> = mask.indices().collect();
        if selected.len() != names.len() {
            return Err(NamesError::NameCountMismatch {
                selected: selected.len(),
                given: names.len(),
            });
        }
        if let Some(bad) = names.iter().find(|n| !is_valid_name(n)) {
            return Err(OptionError::InvalidName(bad.clone()).into());
        }

        let mut renamed = self.variable_names();
        for (&i, name) in selected.iter().zip(names) {
            renamed[i].clone_from(name);
        }
        check_unique(renamed.iter().map(String::as_str))?;

        for (&i, name) in selected.iter().zip(names) {
            debug!(from = %self.variables[i].name(), to = %name, "renaming variable");
            self.variables[i].set_name(name)?;
        }
        Ok(())
    }
}

fn check_unique<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), NamesError> {
    let mut seen = std::collections::HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(NamesError::DuplicateVariableName(name.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::schema::VarType;
    use crate::selection::SelectionError;

    fn abc() -> ImportOptions {
        ImportOptions::new(vec![
            VariableOptions::new("A", VarType::Double).unwrap(),
            VariableOptions::new("B", VarType::String).unwrap(),
            VariableOptions::new("C", VarType::Logical).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = ImportOptions::new(vec![
            VariableOptions::new("A", VarType::Double).unwrap(),
            VariableOptions::new("A", VarType::Char).unwrap(),
        ])
        .unwrap_err();
        assert_eq!(err, NamesError::DuplicateVariableName("A".to_string()));
    }

    #[test]
    fn test_variable_names_in_order() {
        assert_eq!(abc().variable_names(), vec!["A", "B", "C"]);
        assert_eq!(abc().variable("B").unwrap().var_type(), VarType::String);
        assert!(abc().variable("D").is_none());
    }

    #[test]
    fn test_rename_selected() {
        let mut opts = abc();
        opts.set_variable_names(&Arg::from(vec![1.0, 3.0]), &["First".into(), "Third".into()])
            .unwrap();
        assert_eq!(opts.variable_names(), vec!["First", "B", "Third"]);
    }

    #[test]
    fn test_rename_allows_swapping_names() {
        let mut opts = abc();
        opts.set_variable_names(&Arg::from(vec!["A", "B"]), &["B".into(), "A".into()]).unwrap();
        assert_eq!(opts.variable_names(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_rename_rejects_duplicates_without_changes() {
        let mut opts = abc();
        let err = opts.set_variable_names(&Arg::from("A"), &["C".into()]).unwrap_err();
        assert_eq!(err, NamesError::DuplicateVariableName("C".to_string()));
        assert_eq!(opts, abc());
    }

    #[test]
    fn test_rename_count_mismatch() {
        let mut opts = abc();
        let err = opts.set_variable_names(&Arg::Empty, &["X".into()]).unwrap_err();
        assert_eq!(err, NamesError::NameCountMismatch { selected: 3, given: 1 });
    }

    #[test]
    fn test_rename_invalid_name() {
        let mut opts = abc();
        let err = opts.set_variable_names(&Arg::from("B"), &["no good".into()]).unwrap_err();
        assert_eq!(err, NamesError::Option(OptionError::InvalidName("no good".to_string())));
    }

    #[test]
    fn test_rename_unknown_selection() {
        let mut opts = abc();
        let err = opts.set_variable_names(&Arg::from("Z"), &["X".into()]).unwrap_err();
        assert_eq!(
            err,
            NamesError::Selection(SelectionError::UnknownVariableName("Z".to_string()))
        );
    }
}
