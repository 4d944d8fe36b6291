//! Applying supplied options to the selected records.

use tracing::debug;

use crate::arg::Arg;
use crate::options::{ImportOptions, OptionField, VariableOptions};
use crate::selection::SelectionError;

use super::{SetVarOpts, SetVarOptsError};

impl SetVarOpts {
    /// Apply every supplied option to every selected variable.
    ///
    /// `Type` is applied first since it decides which other options exist;
    /// the rest follow in the order supplied. Constraints between options are
    /// checked once everything is assigned. Work happens on copies of the
    /// selected records, committed only on success: on error `options` is
    /// left unchanged.
    pub fn execute(&self, options: &mut ImportOptions) -> Result<(), SetVarOptsError> {
        if self.is_supplied(OptionField::Name) {
            return Err(SetVarOptsError::SetThroughPropertyOnly {
                field: OptionField::Name,
                path: "ImportOptions::set_variable_names",
            });
        }

        let selected: Vec<usize> = self.selection.indices().collect();
        if selected.iter().any(|&i| i >= options.len()) {
            return Err(SelectionError::BadSelectionInput.into());
        }

        let mut staged: Vec<VariableOptions> =
            selected.iter().map(|&i| options.variables()[i].clone()).collect();

        for (position, (field, value)) in self.application_order().enumerate() {
            for record in &mut staged {
                if !record.supports(field) {
                    return Err(if position == 0 {
                        SetVarOptsError::OptionNotAvailableForType(field)
                    } else {
                        SetVarOptsError::NoValueForNamedOrNumbered(field)
                    });
                }
                record.set_option(field, value)?;
            }
            debug!(option = %field, variables = staged.len(), "applied option");
        }
        for record in &staged {
            record.validate()?;
        }

        let records = options.variables_mut();
        for (i, record) in selected.into_iter().zip(staged) {
            records[i] = record;
        }
        Ok(())
    }

    fn application_order(&self) -> impl Iterator<Item = (OptionField, &Arg)> + '_ {
        let types = self.supplied.iter().filter(|(f, _)| *f == OptionField::Type);
        let rest = self.supplied.iter().filter(|(f, _)| *f != OptionField::Type);
        types.chain(rest).map(|(f, v)| (*f, v))
    }
}
