//! Telling `(selection, name, value, ...)` apart from `(name, value, ...)`.

use tracing::debug;

use crate::arg::Arg;
use crate::options::{ImportOptions, OptionField};
use crate::selection::{self, SelectionMask};

use super::{SetVarOpts, SetVarOptsError};

impl SetVarOpts {
    /// Parse positional arguments following the options object.
    ///
    /// An odd count means the first argument is the selection. An even count
    /// means no selection was given, unless the first argument happens to be
    /// a valid selection: then a value is missing somewhere, and the input
    /// is rejected. A name that is also a variable name is therefore read as
    /// a selection; pass the selection explicitly to avoid that.
    pub fn validate(options: &ImportOptions, args: &[Arg]) -> Result<Self, SetVarOptsError> {
        let names = options.variable_names();

        let (selection, pairs) = if args.len() % 2 == 0 {
            if let Some(first) = args.first()
                && selection::resolve(&names, first).is_ok()
            {
                return Err(malformed_pairs(args));
            }
            debug!("no selection given, selecting every variable");
            (SelectionMask::all(names.len()), args)
        } else {
            (selection::resolve(&names, &args[0])?, &args[1..])
        };

        let mut command = Self::new(selection);
        for pair in pairs.chunks(2) {
            let name = pair[0].as_text().ok_or(SetVarOptsError::ParamMustBeName)?;
            let field: OptionField =
                name.parse().map_err(|_| SetVarOptsError::UnknownOption(name.to_string()))?;
            command.supply(field, pair[1].clone());
        }
        Ok(command)
    }
}

fn malformed_pairs(args: &[Arg]) -> SetVarOptsError {
    match args.last().and_then(Arg::as_text) {
        Some(name) => SetVarOptsError::MissingOptionValue(name.to_string()),
        None => SetVarOptsError::ParamMustBeName,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{VarType, VariableOptions};
    use crate::selection::SelectionError;

    fn abc() -> ImportOptions {
        ImportOptions::new(
            ["A", "B", "C"]
                .into_iter()
                .map(|n| VariableOptions::new(n, VarType::Double).unwrap())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_selection_then_pairs() {
        let args = [Arg::from(vec!["A", "C"]), Arg::from("FillValue"), Arg::from(0)];
        let cmd = SetVarOpts::validate(&abc(), &args).unwrap();
        assert_eq!(cmd.selection().as_slice(), [true, false, true]);
        assert_eq!(cmd.supplied(), [(OptionField::FillValue, Arg::Number(0.0))]);
    }

    #[test]
    fn test_pairs_without_selection_select_all() {
        let args = [Arg::from("FillValue"), Arg::from(0), Arg::from("Type"), Arg::from("single")];
        let cmd = SetVarOpts::validate(&abc(), &args).unwrap();
        assert_eq!(cmd.selection(), &SelectionMask::all(3));
        assert_eq!(cmd.supplied().len(), 2);
    }

    #[test]
    fn test_no_arguments_select_all_and_supply_nothing() {
        let cmd = SetVarOpts::validate(&abc(), &[]).unwrap();
        assert_eq!(cmd.selection(), &SelectionMask::all(3));
        assert!(cmd.supplied().is_empty());
    }

    #[test]
    fn test_valid_selection_with_missing_value() {
        let args = [Arg::from("B"), Arg::from("FillValue")];
        let err = SetVarOpts::validate(&abc(), &args).unwrap_err();
        assert_eq!(err, SetVarOptsError::MissingOptionValue("FillValue".to_string()));
    }

    #[test]
    fn test_valid_selection_with_trailing_non_name() {
        let args = [Arg::Number(2.0), Arg::Number(5.0)];
        let err = SetVarOpts::validate(&abc(), &args).unwrap_err();
        assert_eq!(err, SetVarOptsError::ParamMustBeName);
    }

    #[test]
    fn test_odd_count_propagates_selection_error() {
        let args = [Arg::from("D"), Arg::from("FillValue"), Arg::from(0)];
        let err = SetVarOpts::validate(&abc(), &args).unwrap_err();
        assert_eq!(
            err,
            SetVarOptsError::Selection(SelectionError::UnknownVariableName("D".into()))
        );
    }

    #[test]
    fn test_name_must_be_text() {
        let args = [Arg::from(":"), Arg::from(0), Arg::from("FillValue")];
        let err = SetVarOpts::validate(&abc(), &args).unwrap_err();
        assert_eq!(err, SetVarOptsError::ParamMustBeName);
    }

    #[test]
    fn test_unknown_option_name() {
        let args = [Arg::from("Colour"), Arg::from("red")];
        let err = SetVarOpts::validate(&abc(), &args).unwrap_err();
        assert_eq!(err, SetVarOptsError::UnknownOption("Colour".to_string()));
    }

    #[test]
    fn test_option_names_ignore_case() {
        let args = [Arg::from("fillvalue"), Arg::from(1)];
        let cmd = SetVarOpts::validate(&abc(), &args).unwrap();
        assert!(cmd.is_supplied(OptionField::FillValue));
    }
}
