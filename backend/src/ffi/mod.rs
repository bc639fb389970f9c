//! Python bindings
//!
//! Exposes the picker to Python with the same surface as the pure-Python
//! package: a `pick_attendees` function, a warning raised through the
//! `warnings` module when everyone fits, and a `ValueError` subclass when the
//! organizers fill the capacity.

pub mod picker;
pub mod types;
