//! Tests for PickerConfig and the reusable Picker

use attendees_picker::{Picker, PickerConfig, SelectionNote, SelectionOutcome};

fn names(xs: &[&str]) -> Vec<String> {
    xs.iter().map(|s| s.to_string()).collect()
}

fn guests() -> Vec<String> {
    (0..12).map(|i| format!("guest-{}", i)).collect()
}

#[test]
fn test_config_from_json() {
    let config: PickerConfig = serde_json::from_str(r#"{"rng_seed": 12345}"#).unwrap();
    assert_eq!(config, PickerConfig::seeded(12345));
}

#[test]
fn test_config_missing_seed_defaults_to_entropy() {
    let config: PickerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, PickerConfig::default());
    assert!(config.rng_seed.is_none());
}

#[test]
fn test_seeded_pickers_replay_sequence() {
    let mut picker1 = Picker::new(PickerConfig::seeded(42)).unwrap();
    let mut picker2 = Picker::new(PickerConfig::seeded(42)).unwrap();

    for _ in 0..5 {
        let a = picker1.pick(6, names(&["Alice"]), guests()).unwrap();
        let b = picker2.pick(6, names(&["Alice"]), guests()).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn test_picker_replays_from_state() {
    let mut picker = Picker::new(PickerConfig::seeded(7)).unwrap();
    picker.pick(4, names(&["Alice"]), guests()).unwrap();

    let mut replay = Picker::new(PickerConfig::seeded(picker.rng_state())).unwrap();

    assert_eq!(
        picker.pick(4, names(&["Alice"]), guests()).unwrap(),
        replay.pick(4, names(&["Alice"]), guests()).unwrap()
    );
}

#[test]
fn test_outcome_json_shape() {
    let outcome = SelectionOutcome::new(
        names(&["Alice", "Bob"]),
        Some(SelectionNote::CapacityExceedsPool {
            required_max: 5,
            available: 2,
        }),
    );

    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "attendees": ["Alice", "Bob"],
            "note": {
                "type": "capacity_exceeds_pool",
                "required_max": 5,
                "available": 2,
            },
        })
    );

    let back: SelectionOutcome = serde_json::from_value(value).unwrap();
    assert_eq!(back, outcome);
}
