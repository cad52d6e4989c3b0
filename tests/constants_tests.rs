// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn heart_game_ranges_are_consistent() {
    assert_eq!(HEART_GOAL, 50);
    assert!(HEARTS_PER_TAP_MIN >= 1 && HEARTS_PER_TAP_MIN <= HEARTS_PER_TAP_MAX);
    assert!(HEART_SIZE_MIN > 0.0 && HEART_SIZE_MIN < HEART_SIZE_MAX);
    assert!(HEART_JITTER >= 0.0);
    assert_eq!(HEART_LIFETIME_MS, 2000);
    assert_eq!(COMPLETION_MESSAGES.len(), 4);
    assert!(COMPLETION_MESSAGES.iter().all(|m| !m.is_empty()));
}

#[test]
fn note_tables_ascend() {
    for table in [&NAV_NOTES_HZ[..], &TAP_NOTES_HZ[..], &COMPLETION_NOTES_HZ[..]] {
        assert!(table.windows(2).all(|w| w[0] < w[1]), "{table:?}");
        assert!(table.iter().all(|f| *f > 20.0 && *f < 20_000.0));
    }
    assert_eq!(TAP_NOTES_HZ.len(), 5);
    assert_eq!(COMPLETION_NOTES_HZ.len(), 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn envelope_and_timing_are_sane() {
    assert!(ENVELOPE_PEAK_RATIO > 0.0 && ENVELOPE_PEAK_RATIO <= 1.0);
    assert!(ENVELOPE_FLOOR > 0.0);
    assert!(ENVELOPE_ATTACK_SEC < NAV_NOTE_SEC);
    assert!(ENVELOPE_ATTACK_SEC < TAP_NOTE_SEC);
    assert!(NAV_NOTE_GAP_SEC < NAV_NOTE_SEC);
}

#[test]
fn storage_keys_are_distinct_and_default_volume_in_range() {
    let keys = [
        STORAGE_KEY_MUSIC_ENABLED,
        STORAGE_KEY_VOLUME,
        STORAGE_KEY_SFX_ENABLED,
    ];
    for (i, a) in keys.iter().enumerate() {
        for b in &keys[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!((0.0..=1.0).contains(&DEFAULT_VOLUME));
}
