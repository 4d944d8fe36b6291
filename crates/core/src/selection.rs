//! Resolving which variables an operation applies to.
//!
//! A selection arrives as an [`Arg`] and becomes a [`SelectionMask`] with one
//! entry per variable:
//!
//! | Selection                  | Meaning                                  |
//! |----------------------------|------------------------------------------|
//! | empty                      | every variable                           |
//! | `":"`                      | every variable                           |
//! | name or list of names      | the named variables                      |
//! | number or list of numbers  | 1-based indices                          |
//! | logical or logical list    | the mask itself, padded with `false`     |

use thiserror::Error;
use tracing::debug;

use crate::arg::Arg;

/// Errors resolving a selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown variable name: '{0}'")]
    UnknownVariableName(String),

    #[error("no variables are available to select by index")]
    NoVariablesAvailable,

    #[error("numeric selections must be integer indices from 1 to {count}")]
    BadNumericSelection { count: usize },

    #[error(
        "selection must be variable names, ':', numeric indices, or a logical mask no longer than the number of variables"
    )]
    BadSelectionInput,
}

/// One flag per variable marking whether it is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMask(Vec<bool>);

impl SelectionMask {
    /// Every one of `len` variables.
    pub fn all(len: usize) -> Self {
        Self(vec![true; len])
    }

    /// None of `len` variables.
    pub fn none(len: usize) -> Self {
        Self(vec![false; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    /// Zero-based indices of the selected variables, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().filter(|(_, s)| **s).map(|(i, _)| i)
    }

    /// Number of selected variables.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|s| **s).count()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

/// Resolve `selection` against the ordered variable `names`.
pub fn resolve<S: AsRef<str>>(
    names: &[S],
    selection: &Arg,
) -> Result<SelectionMask, SelectionError> {
    let n = names.len();

    let mask = match selection {
        Arg::Empty => SelectionMask::all(n),
        s if s.is_empty() => SelectionMask::all(n),
        Arg::Text(s) if s == ":" => SelectionMask::all(n),
        Arg::Text(s) => by_name(names, std::slice::from_ref(s))?,
        Arg::Texts(list) => by_name(names, list)?,
        Arg::Number(i) => by_index(n, std::slice::from_ref(i))?,
        Arg::Numbers(list) => by_index(n, list)?,
        Arg::Logical(b) => by_mask(n, std::slice::from_ref(b))?,
        Arg::Logicals(list) => by_mask(n, list)?,
    };

    debug!(selected = mask.count(), variables = n, "resolved selection");
    Ok(mask)
}

fn by_name<S: AsRef<str>>(names: &[S], wanted: &[String]) -> Result<SelectionMask, SelectionError> {
    let mut mask = SelectionMask::none(names.len());
    for w in wanted {
        let i = names
            .iter()
            .position(|n| n.as_ref() == w)
            .ok_or_else(|| SelectionError::UnknownVariableName(w.clone()))?;
        mask.0[i] = true;
    }
    Ok(mask)
}

fn by_index(n: usize, indices: &[f64]) -> Result<SelectionMask, SelectionError> {
    let in_range = |i: f64| i.fract() == 0.0 && i >= 1.0 && i <= n as f64;
    if !indices.iter().all(|&i| in_range(i)) {
        return Err(if n == 0 {
            SelectionError::NoVariablesAvailable
        } else {
            SelectionError::BadNumericSelection { count: n }
        });
    }

    let mut mask = SelectionMask::none(n);
    for &i in indices {
        mask.0[i as usize - 1] = true;
    }
    Ok(mask)
}

fn by_mask(n: usize, flags: &[bool]) -> Result<SelectionMask, SelectionError> {
    if flags.len() > n {
        return Err(SelectionError::BadSelectionInput);
    }
    let mut mask = SelectionMask::none(n);
    mask.0[..flags.len()].copy_from_slice(flags);
    Ok(mask)
}
