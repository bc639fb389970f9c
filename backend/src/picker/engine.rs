//! Attendee selection engine
//!
//! Three rules, evaluated in order:
//!
//! 1. **Everyone fits**: organizers + candidates <= capacity. Everyone is
//!    returned in input order and the outcome carries
//!    [`SelectionNote::CapacityExceedsPool`].
//! 2. **Too many organizers**: capacity <= organizers. Fails with
//!    [`PickError::TooManyOrganizers`]; no partial result.
//! 3. **Partial selection**: the free slots are filled with a uniform random
//!    sample of candidates, drawn from any [`rand::Rng`].
//!
//! Names are never deduplicated. An organizer that is also listed as a
//! candidate may appear twice.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::models::{PickError, SelectionNote, SelectionOutcome};
use crate::rng::{RngError, RngManager};

use super::PickerConfig;

/// Pick attendees from the given candidates
///
/// Only `max_attendees` people are selected. The organizers are always
/// selected and are at the beginning of the returned list, in their original
/// order. `candidates` is consumed; its order is not preserved.
///
/// # Errors
///
/// Returns [`PickError::TooManyOrganizers`] when the organizers alone fill
/// the capacity while candidates remain outside it.
///
/// # Example
/// ```
/// use attendees_picker::{pick_attendees, PickError, RngManager, SelectionNote};
///
/// let names = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
/// let mut rng = RngManager::new(42);
///
/// let outcome = pick_attendees(
///     5,
///     names(&["Alice", "Bob"]),
///     names(&["Charles", "David", "Eliot", "Frederic"]),
///     &mut rng,
/// )
/// .unwrap();
/// assert_eq!(outcome.len(), 5);
/// assert_eq!(&outcome.attendees()[0..2], ["Alice", "Bob"]);
///
/// // Enough place for everyone: all returned, with a note.
/// let outcome = pick_attendees(
///     5,
///     names(&["Alice", "Bob"]),
///     names(&["Charles", "David", "Eliot"]),
///     &mut rng,
/// )
/// .unwrap();
/// assert_eq!(outcome.attendees(), ["Alice", "Bob", "Charles", "David", "Eliot"]);
/// assert_eq!(
///     outcome.note(),
///     Some(&SelectionNote::CapacityExceedsPool { required_max: 5, available: 5 })
/// );
///
/// // Organizers alone fill the capacity.
/// let err = pick_attendees(
///     2,
///     names(&["Alice", "Bob"]),
///     names(&["Charles", "David", "Eliot"]),
///     &mut rng,
/// )
/// .unwrap_err();
/// assert_eq!(err, PickError::TooManyOrganizers { required_max: 2, organizers: 2 });
/// ```
pub fn pick_attendees<R: Rng + ?Sized>(
    max_attendees: usize,
    mut organizers: Vec<String>,
    mut candidates: Vec<String>,
    rng: &mut R,
) -> Result<SelectionOutcome, PickError> {
    let people_number = organizers.len() + candidates.len();

    if people_number <= max_attendees {
        let note = SelectionNote::CapacityExceedsPool {
            required_max: max_attendees,
            available: people_number,
        };
        warn!(
            required_max = max_attendees,
            available = people_number,
            "{}",
            note
        );
        organizers.append(&mut candidates);
        return Ok(SelectionOutcome::new(organizers, Some(note)));
    }

    if max_attendees <= organizers.len() {
        debug!(
            required_max = max_attendees,
            organizers = organizers.len(),
            "organizers fill the capacity"
        );
        return Err(PickError::TooManyOrganizers {
            required_max: max_attendees,
            organizers: organizers.len(),
        });
    }

    let organizer_count = organizers.len();
    let slots = max_attendees - organizer_count;
    let (chosen, _) = candidates.partial_shuffle(rng, slots);
    organizers.extend(chosen.iter_mut().map(std::mem::take));
    debug!(
        organizers = organizer_count,
        slots,
        pool = people_number,
        "candidates sampled"
    );

    Ok(SelectionOutcome::new(organizers, None))
}

/// Stateful picker owning its random source
///
/// Successive picks continue the same generator stream, so a seeded picker
/// reproduces a whole sequence of draws.
///
/// # Example
/// ```
/// use attendees_picker::{Picker, PickerConfig};
///
/// let mut first = Picker::new(PickerConfig::seeded(7)).unwrap();
/// let mut second = Picker::new(PickerConfig::seeded(7)).unwrap();
///
/// let candidates: Vec<String> = ["Charles", "David", "Eliot", "Frederic"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let a = first.pick(3, vec!["Alice".into()], candidates.clone()).unwrap();
/// let b = second.pick(3, vec!["Alice".into()], candidates).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Picker {
    config: PickerConfig,
    rng: RngManager,
}

impl Picker {
    /// Create a picker from configuration
    ///
    /// # Errors
    ///
    /// Returns [`RngError`] if no seed is configured and OS entropy is
    /// unavailable.
    pub fn new(config: PickerConfig) -> Result<Self, RngError> {
        let rng = match config.rng_seed {
            Some(seed) => RngManager::new(seed),
            None => RngManager::from_entropy()?,
        };
        debug!(seeded = config.rng_seed.is_some(), "picker created");
        Ok(Self { config, rng })
    }

    /// Pick attendees, see [`pick_attendees`]
    pub fn pick(
        &mut self,
        max_attendees: usize,
        organizers: Vec<String>,
        candidates: Vec<String>,
    ) -> Result<SelectionOutcome, PickError> {
        pick_attendees(max_attendees, organizers, candidates, &mut self.rng)
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Current generator state; a picker seeded with it replays the next draws
    pub fn rng_state(&self) -> u64 {
        self.rng.get_state()
    }
}
