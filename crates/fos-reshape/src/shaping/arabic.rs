//! Arabic Joining
//!
//! Contextual form selection and Lam-Alef ligature substitution over
//! UTF-16 code units.
//!
//! Connectivity is decided from the immediate neighbors only:
//! - the previous unit connects if it is Arabic and not a right-joining letter
//! - the next unit connects if it is Arabic
//!
//! The next-side test does not consult the non-connecting set, so a letter
//! followed by hamza or an Arabic digit still takes its initial form.

use super::script::is_script_char;
use super::tables::{LAM, is_non_connecting_next, lam_alef_forms, presentation_forms};

/// Arabic positional form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionalForm {
    /// Isolated form (no connections)
    Isolated,
    /// Final form (connects to previous only)
    Final,
    /// Initial form (connects to next only)
    Initial,
    /// Medial form (connects both sides)
    Medial,
}

impl PositionalForm {
    /// Resolve the form from the two connection flags
    pub fn from_connections(prev_connects: bool, next_connects: bool) -> Self {
        match (prev_connects, next_connects) {
            (true, true) => PositionalForm::Medial,
            (true, false) => PositionalForm::Final,
            (false, true) => PositionalForm::Initial,
            (false, false) => PositionalForm::Isolated,
        }
    }

    /// Index into a `[isolated, final, initial, medial]` table row
    fn index(self) -> usize {
        match self {
            PositionalForm::Isolated => 0,
            PositionalForm::Final => 1,
            PositionalForm::Initial => 2,
            PositionalForm::Medial => 3,
        }
    }
}

/// Check if the previous unit joins forward into the current letter
#[inline]
pub(crate) fn prev_connects(prev: Option<u16>) -> bool {
    prev.is_some_and(|unit| is_script_char(unit) && !is_non_connecting_next(unit))
}

/// Check if the next unit accepts a connection from the current letter
#[inline]
pub(crate) fn next_connects(next: Option<u16>) -> bool {
    next.is_some_and(is_script_char)
}

/// Select the presentation form of `unit` given its neighbors.
///
/// Units without a table entry are returned unchanged.
pub fn select_form(unit: u16, prev: Option<u16>, next: Option<u16>) -> u16 {
    let Some(forms) = presentation_forms(unit) else {
        return unit;
    };

    let form = PositionalForm::from_connections(prev_connects(prev), next_connects(next));
    forms[form.index()]
}

/// Lam-Alef ligature for a Lam at the current position.
///
/// Returns `None` unless `unit` is Lam and `next` is one of the four Alef
/// variants. The final form is used when the unit before the Lam connects.
pub(crate) fn lam_alef_ligature(unit: u16, prev: Option<u16>, next: Option<u16>) -> Option<u16> {
    if unit != LAM {
        return None;
    }

    let [isolated, final_form] = lam_alef_forms(next?)?;
    Some(if prev_connects(prev) { final_form } else { isolated })
}
