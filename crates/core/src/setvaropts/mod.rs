//! The setvaropts command: assign options onto selected variables.
//!
//! ```
//! use varopts_core::{Arg, ImportOptions, VarType, VariableOptions, set_var_opts};
//!
//! let opts = ImportOptions::new(vec![
//!     VariableOptions::new("A", VarType::Char).unwrap(),
//!     VariableOptions::new("B", VarType::Char).unwrap(),
//! ])
//! .unwrap();
//!
//! let args = [Arg::from("B"), Arg::from("Type"), Arg::from("double")];
//! let updated = set_var_opts(&opts, &args).unwrap();
//! assert_eq!(updated.variables()[1].var_type(), VarType::Double);
//! assert_eq!(opts.variables()[1].var_type(), VarType::Char);
//! ```
//!
//! Arguments are either `(selection, name, value, ...)` or
//! `(name, value, ...)`; [`SetVarOpts::validate`] tells the two apart.
//! Callers that already hold a [`SelectionMask`] build the command directly
//! with [`SetVarOpts::new`] and [`SetVarOpts::with`].

mod errors;
mod execute;
mod parse;

pub use errors::SetVarOptsError;

use crate::arg::Arg;
use crate::options::{ImportOptions, OptionField};
use crate::selection::SelectionMask;

/// A validated setvaropts invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct SetVarOpts {
    selection: SelectionMask,
    supplied: Vec<(OptionField, Arg)>,
}

impl SetVarOpts {
    /// Command applying nothing yet to the variables in `selection`.
    pub fn new(selection: SelectionMask) -> Self {
        Self { selection, supplied: Vec::new() }
    }

    /// Supply a value for `field`.
    #[must_use]
    pub fn with(mut self, field: OptionField, value: impl Into<Arg>) -> Self {
        self.supply(field, value.into());
        self
    }

    /// Supply a value for `field`. Supplying a field again replaces its value
    /// but keeps its original position.
    pub fn supply(&mut self, field: OptionField, value: Arg) {
        match self.supplied.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.supplied.push((field, value)),
        }
    }

    pub fn selection(&self) -> &SelectionMask {
        &self.selection
    }

    /// Supplied fields and values, in the order supplied.
    pub fn supplied(&self) -> &[(OptionField, Arg)] {
        &self.supplied
    }

    pub fn is_supplied(&self, field: OptionField) -> bool {
        self.supplied.iter().any(|(f, _)| *f == field)
    }
}

/// Validate `args` against `options` and return a copy with them applied.
/// `options` itself is never modified.
pub fn set_var_opts(
    options: &ImportOptions,
    args: &[Arg],
) -> Result<ImportOptions, SetVarOptsError> {
    let command = SetVarOpts::validate(options, args)?;
    let mut updated = options.clone();
    command.execute(&mut updated)?;
    Ok(updated)
}
