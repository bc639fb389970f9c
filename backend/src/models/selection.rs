//! Selection model
//!
//! The result of picking attendees has two channels:
//! - [`SelectionOutcome`] for every successful pick, optionally carrying a
//!   non-fatal [`SelectionNote`]
//! - [`PickError`] when no candidate could ever join
//!
//! Counts are `usize` throughout: they are list lengths.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a pick
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PickError {
    #[error(
        "A maximum number of {required_max} attendees has been required, but {organizers} organizers given. \
         No candidates will be able to join."
    )]
    TooManyOrganizers {
        required_max: usize,
        organizers: usize,
    },
}

/// Non-fatal condition observed while picking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionNote {
    /// The pool is no larger than the capacity, so everyone attends
    CapacityExceedsPool { required_max: usize, available: usize },
}

impl std::fmt::Display for SelectionNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionNote::CapacityExceedsPool {
                required_max,
                available,
            } => write!(
                f,
                "A maximum of {} attendees has been required, but only {} people provided. \
                 Everyone will be able to participate.",
                required_max, available
            ),
        }
    }
}

/// People selected to attend
///
/// Organizers come first in their original order, followed by the chosen
/// candidates.
///
/// # Example
/// ```
/// use attendees_picker::{SelectionNote, SelectionOutcome};
///
/// let outcome = SelectionOutcome::new(vec!["Alice".to_string()], None);
/// assert_eq!(outcome.attendees(), ["Alice"]);
/// assert!(!outcome.everyone_fits());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionOutcome {
    attendees: Vec<String>,
    note: Option<SelectionNote>,
}

impl SelectionOutcome {
    pub fn new(attendees: Vec<String>, note: Option<SelectionNote>) -> Self {
        Self { attendees, note }
    }

    /// Selected people, organizers first
    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }

    pub fn note(&self) -> Option<&SelectionNote> {
        self.note.as_ref()
    }

    /// True when capacity covered the whole pool
    pub fn everyone_fits(&self) -> bool {
        matches!(self.note, Some(SelectionNote::CapacityExceedsPool { .. }))
    }

    pub fn len(&self) -> usize {
        self.attendees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attendees.is_empty()
    }

    pub fn into_attendees(self) -> Vec<String> {
        self.attendees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_organizers_message() {
        let err = PickError::TooManyOrganizers {
            required_max: 2,
            organizers: 2,
        };
        assert_eq!(
            err.to_string(),
            "A maximum number of 2 attendees has been required, but 2 organizers given. \
             No candidates will be able to join."
        );
    }

    #[test]
    fn test_capacity_note_message() {
        let note = SelectionNote::CapacityExceedsPool {
            required_max: 5,
            available: 5,
        };
        assert_eq!(
            note.to_string(),
            "A maximum of 5 attendees has been required, but only 5 people provided. \
             Everyone will be able to participate."
        );
    }

    #[test]
    fn test_everyone_fits_follows_note() {
        let plain = SelectionOutcome::new(vec![], None);
        assert!(!plain.everyone_fits());
        assert!(plain.is_empty());

        let full = SelectionOutcome::new(
            vec!["Alice".into()],
            Some(SelectionNote::CapacityExceedsPool {
                required_max: 3,
                available: 1,
            }),
        );
        assert!(full.everyone_fits());
        assert_eq!(full.len(), 1);
        assert_eq!(full.into_attendees(), vec!["Alice".to_string()]);
    }
}
