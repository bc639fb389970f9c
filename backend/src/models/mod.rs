//! Domain models for the attendees picker

pub mod selection;

// Re-exports
pub use selection::{PickError, SelectionNote, SelectionOutcome};
