//! Exception types and conversions for the FFI boundary

use pyo3::create_exception;
use pyo3::exceptions::{PyRuntimeError, PyRuntimeWarning, PyValueError};
use pyo3::prelude::*;

use crate::models::{PickError, SelectionNote, SelectionOutcome};
use crate::rng::RngError;

create_exception!(attendees_picker, ValueWarning, PyRuntimeWarning);
create_exception!(attendees_picker, MaxAttendeeWarning, ValueWarning);
create_exception!(attendees_picker, TooManyOrganizersError, PyValueError);

impl From<PickError> for PyErr {
    fn from(err: PickError) -> Self {
        TooManyOrganizersError::new_err(err.to_string())
    }
}

impl From<RngError> for PyErr {
    fn from(err: RngError) -> Self {
        PyRuntimeError::new_err(err.to_string())
    }
}

/// Emit the outcome's note (if any) through Python's `warnings` module.
///
/// Returns the attendee list. Fails only when a warnings filter turns the
/// warning into an exception.
pub fn outcome_to_py(py: Python<'_>, outcome: SelectionOutcome) -> PyResult<Vec<String>> {
    if let Some(note) = outcome.note() {
        let category = match note {
            SelectionNote::CapacityExceedsPool { .. } => py.get_type_bound::<MaxAttendeeWarning>(),
        };
        PyErr::warn_bound(py, category.as_any(), &note.to_string(), 1)?;
    }
    Ok(outcome.into_attendees())
}
