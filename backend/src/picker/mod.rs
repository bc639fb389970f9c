//! Picker - attendee selection
//!
//! See `engine.rs` for the selection rules.

pub mod config;
pub mod engine;

// Re-export main types for convenience
pub use config::PickerConfig;
pub use engine::{pick_attendees, Picker};
