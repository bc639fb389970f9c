//! PyO3 wrappers for the picker
//!
//! # Example (from Python)
//!
//! ```python
//! from attendees_picker import Picker, pick_attendees
//!
//! attendees = pick_attendees(5, organizers=["Alice", "Bob"],
//!                            candidates=["Charles", "David", "Eliot", "Frederic"])
//! assert attendees[0:2] == ["Alice", "Bob"]
//!
//! picker = Picker(seed=12345)
//! picker.pick(3, ["Alice"], ["Charles", "David", "Eliot"])
//! ```

use pyo3::prelude::*;

use super::types::outcome_to_py;
use crate::picker::{engine, Picker as RustPicker, PickerConfig};
use crate::rng::RngManager;

/// Pick attendees from the given candidates
///
/// Organizers are always selected and come first. Emits
/// `MaxAttendeeWarning` when everyone fits, raises `TooManyOrganizersError`
/// when the organizers fill the capacity.
#[pyfunction]
#[pyo3(name = "pick_attendees", signature = (max_attendees, organizers, candidates))]
pub fn py_pick_attendees(
    py: Python<'_>,
    max_attendees: usize,
    organizers: Vec<String>,
    candidates: Vec<String>,
) -> PyResult<Vec<String>> {
    let mut rng = RngManager::from_entropy()?;
    let outcome = engine::pick_attendees(max_attendees, organizers, candidates, &mut rng)?;
    outcome_to_py(py, outcome)
}

/// Python wrapper for a reusable, optionally seeded picker
#[pyclass(name = "Picker")]
pub struct PyPicker {
    inner: RustPicker,
}

#[pymethods]
impl PyPicker {
    #[new]
    #[pyo3(signature = (seed=None))]
    pub fn new(seed: Option<u64>) -> PyResult<Self> {
        let inner = RustPicker::new(PickerConfig { rng_seed: seed })?;
        Ok(PyPicker { inner })
    }

    #[pyo3(signature = (max_attendees, organizers, candidates))]
    pub fn pick(
        &mut self,
        py: Python<'_>,
        max_attendees: usize,
        organizers: Vec<String>,
        candidates: Vec<String>,
    ) -> PyResult<Vec<String>> {
        let outcome = self.inner.pick(max_attendees, organizers, candidates)?;
        outcome_to_py(py, outcome)
    }

    #[getter]
    pub fn seed(&self) -> Option<u64> {
        self.inner.config().rng_seed
    }
}
