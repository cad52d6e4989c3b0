// Host-side tests for persisted audio settings and autoplay retry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod settings {
    include!("../src/core/settings.rs");
}
mod playback {
    include!("../src/core/playback.rs");
}

use constants::*;
use playback::*;
use settings::*;

struct ReadOnlyRepo;

impl SettingsRepository for ReadOnlyRepo {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }
    fn set(&mut self, key: &str, _value: &str) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("quota exceeded writing {key}"))
    }
}

#[test]
fn empty_storage_loads_defaults() {
    let store = AudioSettingsStore::load(MemorySettings::default());
    assert_eq!(
        store.settings(),
        AudioSettings {
            music_enabled: false,
            volume: 0.5,
            sfx_enabled: false,
        }
    );
}

#[test]
fn stored_values_are_loaded() {
    let repo = MemorySettings::default()
        .with(STORAGE_KEY_MUSIC_ENABLED, "true")
        .with(STORAGE_KEY_VOLUME, "0.8")
        .with(STORAGE_KEY_SFX_ENABLED, "true");
    let s = AudioSettingsStore::load(repo).settings();
    assert!(s.music_enabled);
    assert!(s.sfx_enabled);
    assert!((s.volume - 0.8).abs() < 1e-6);
}

#[test]
fn malformed_values_fall_back_to_defaults() {
    for bad_volume in ["loud", "", "NaN", "inf", "-inf"] {
        let repo = MemorySettings::default()
            .with(STORAGE_KEY_MUSIC_ENABLED, "yes")
            .with(STORAGE_KEY_VOLUME, bad_volume)
            .with(STORAGE_KEY_SFX_ENABLED, "1");
        let s = AudioSettingsStore::load(repo).settings();
        assert_eq!(s, AudioSettings::default(), "volume {bad_volume:?}");
    }
}

#[test]
fn out_of_range_stored_volume_is_clamped() {
    let repo = MemorySettings::default().with(STORAGE_KEY_VOLUME, "3.5");
    assert_eq!(AudioSettingsStore::load(repo).settings().volume, 1.0);
    let repo = MemorySettings::default().with(STORAGE_KEY_VOLUME, "-2");
    assert_eq!(AudioSettingsStore::load(repo).settings().volume, 0.0);
}

#[test]
fn volume_setter_clamps_and_persists() {
    let mut store = AudioSettingsStore::load(MemorySettings::default());

    store.set_volume(-0.3);
    assert_eq!(store.settings().volume, 0.0);
    assert_eq!(store.repository().raw(STORAGE_KEY_VOLUME), Some("0"));

    store.set_volume(1.7);
    assert_eq!(store.settings().volume, 1.0);
    assert_eq!(store.repository().raw(STORAGE_KEY_VOLUME), Some("1"));

    store.set_volume(0.42);
    assert_eq!(store.settings().volume, 0.42);
    assert_eq!(store.repository().raw(STORAGE_KEY_VOLUME), Some("0.42"));

    let reloaded = AudioSettingsStore::load(store.into_repository());
    assert_eq!(reloaded.settings().volume, 0.42);
}

#[test]
fn flag_setters_write_through_independently() {
    let mut store = AudioSettingsStore::load(MemorySettings::default());
    store.set_music_enabled(true);
    assert_eq!(store.repository().raw(STORAGE_KEY_MUSIC_ENABLED), Some("true"));
    assert_eq!(store.repository().raw(STORAGE_KEY_SFX_ENABLED), None);
    assert_eq!(store.repository().raw(STORAGE_KEY_VOLUME), None);

    store.set_sfx_enabled(true);
    store.set_music_enabled(false);
    let s = AudioSettingsStore::load(store.into_repository()).settings();
    assert!(!s.music_enabled);
    assert!(s.sfx_enabled);
    assert_eq!(s.volume, DEFAULT_VOLUME);
}

#[test]
fn persistence_failure_keeps_in_memory_value() {
    let mut store = AudioSettingsStore::load(ReadOnlyRepo);
    store.set_volume(0.9);
    store.set_sfx_enabled(true);
    assert_eq!(store.settings().volume, 0.9);
    assert!(store.settings().sfx_enabled);
}

#[test]
fn clamp_volume_bounds() {
    assert_eq!(clamp_volume(0.25), 0.25);
    assert_eq!(clamp_volume(f32::INFINITY), 1.0);
    assert_eq!(clamp_volume(f32::NAN), DEFAULT_VOLUME);
}

#[test]
fn blocked_autoplay_waits_for_a_gesture() {
    let mut gate = PlaybackGate::default();
    assert!(!gate.should_retry(true));

    gate.on_play_result(false);
    assert!(gate.needs_gesture());
    assert!(gate.should_retry(true));
    assert!(!gate.should_retry(false));

    // still blocked: keep waiting
    gate.on_play_result(false);
    assert!(gate.should_retry(true));

    gate.on_play_result(true);
    assert!(!gate.needs_gesture());
    assert!(!gate.should_retry(true));
}

#[test]
fn disabling_music_clears_pending_retry() {
    let mut gate = PlaybackGate::default();
    gate.on_play_result(false);
    gate.on_disabled();
    assert!(!gate.should_retry(true));
}
