//! Picker configuration

use serde::{Deserialize, Serialize};

/// Configuration for a [`Picker`](super::Picker)
///
/// # Fields
///
/// * `rng_seed` - Seed for reproducible picks. `None` seeds each picker
///   from OS entropy.
///
/// # Example
/// ```
/// use attendees_picker::PickerConfig;
///
/// let config = PickerConfig::seeded(12345);
/// assert_eq!(config.rng_seed, Some(12345));
/// assert_eq!(PickerConfig::default().rng_seed, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// RNG seed for deterministic picking
    pub rng_seed: Option<u64>,
}

impl PickerConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng_seed: Some(seed),
        }
    }
}
