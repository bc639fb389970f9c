//! Attendees Picker
//!
//! Picks who attends an event: organizers always attend, remaining seats are
//! filled with a uniform random sample of candidates.
//!
//! # Architecture
//!
//! - **models**: Selection outcome, note and error types
//! - **picker**: Selection rules and the reusable `Picker`
//! - **rng**: The xorshift64* generator behind `rand::RngCore`
//!
//! # Critical Invariants
//!
//! 1. Organizers come first, in input order
//! 2. Without an error, `len(result) == min(max, organizers + candidates)`
//! 3. All randomness goes through a caller-supplied `rand::Rng`
//!
//! # Example
//! ```
//! use attendees_picker::{Picker, PickerConfig};
//!
//! let mut picker = Picker::new(PickerConfig::default()).unwrap();
//! let outcome = picker
//!     .pick(
//!         5,
//!         vec!["Alice".into(), "Bob".into()],
//!         vec!["Charles".into(), "David".into(), "Eliot".into(), "Frederic".into()],
//!     )
//!     .unwrap();
//! assert_eq!(outcome.len(), 5);
//! assert_eq!(&outcome.attendees()[0..2], ["Alice", "Bob"]);
//! ```

// Module declarations
pub mod models;
pub mod picker;
pub mod rng;

// Re-exports for convenience
pub use models::{PickError, SelectionNote, SelectionOutcome};
pub use picker::{pick_attendees, Picker, PickerConfig};
pub use rng::{RngError, RngManager};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn attendees_picker(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let py = m.py();
    m.add("ValueWarning", py.get_type_bound::<ffi::types::ValueWarning>())?;
    m.add(
        "MaxAttendeeWarning",
        py.get_type_bound::<ffi::types::MaxAttendeeWarning>(),
    )?;
    m.add(
        "TooManyOrganizersError",
        py.get_type_bound::<ffi::types::TooManyOrganizersError>(),
    )?;
    m.add_function(wrap_pyfunction!(ffi::picker::py_pick_attendees, m)?)?;
    m.add_class::<ffi::picker::PyPicker>()?;
    Ok(())
}
