use super::constants::{
    DEFAULT_VOLUME, STORAGE_KEY_MUSIC_ENABLED, STORAGE_KEY_SFX_ENABLED, STORAGE_KEY_VOLUME,
};
use fnv::FnvHashMap;

/// Durable string key-value storage (browser `localStorage` on the web).
pub trait SettingsRepository {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-memory repository, used by tests and when no durable storage exists.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: FnvHashMap<String, String>,
}

impl MemorySettings {
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl SettingsRepository for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioSettings {
    pub music_enabled: bool,
    pub volume: f32,
    pub sfx_enabled: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_enabled: false,
            volume: DEFAULT_VOLUME,
            sfx_enabled: false,
        }
    }
}

#[inline]
pub fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        DEFAULT_VOLUME
    } else {
        volume.clamp(0.0, 1.0)
    }
}

fn parse_flag(key: &str, raw: Option<String>, default: bool) -> bool {
    match raw.as_deref() {
        None => default,
        Some("true") => true,
        Some("false") => false,
        Some(other) => {
            log::warn!("[settings] ignoring malformed {}={:?}", key, other);
            default
        }
    }
}

fn parse_volume(raw: Option<String>) -> f32 {
    let Some(raw) = raw else {
        return DEFAULT_VOLUME;
    };
    match raw.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => clamp_volume(v),
        _ => {
            log::warn!("[settings] ignoring malformed {}={:?}", STORAGE_KEY_VOLUME, raw);
            DEFAULT_VOLUME
        }
    }
}

/// Audio preferences, written through to the repository on every change.
pub struct AudioSettingsStore<R: SettingsRepository> {
    repo: R,
    settings: AudioSettings,
}

impl<R: SettingsRepository> AudioSettingsStore<R> {
    /// Read all three keys; missing or malformed values fall back to defaults.
    pub fn load(repo: R) -> Self {
        let defaults = AudioSettings::default();
        let settings = AudioSettings {
            music_enabled: parse_flag(
                STORAGE_KEY_MUSIC_ENABLED,
                repo.get(STORAGE_KEY_MUSIC_ENABLED),
                defaults.music_enabled,
            ),
            volume: parse_volume(repo.get(STORAGE_KEY_VOLUME)),
            sfx_enabled: parse_flag(
                STORAGE_KEY_SFX_ENABLED,
                repo.get(STORAGE_KEY_SFX_ENABLED),
                defaults.sfx_enabled,
            ),
        };
        log::info!(
            "[settings] loaded music={} volume={:.2} sfx={}",
            settings.music_enabled,
            settings.volume,
            settings.sfx_enabled
        );
        Self { repo, settings }
    }

    pub fn settings(&self) -> AudioSettings {
        self.settings
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.settings.music_enabled = enabled;
        self.persist(STORAGE_KEY_MUSIC_ENABLED, &enabled.to_string());
    }

    pub fn set_volume(&mut self, volume: f32) {
        let volume = clamp_volume(volume);
        self.settings.volume = volume;
        self.persist(STORAGE_KEY_VOLUME, &volume.to_string());
    }

    pub fn set_sfx_enabled(&mut self, enabled: bool) {
        self.settings.sfx_enabled = enabled;
        self.persist(STORAGE_KEY_SFX_ENABLED, &enabled.to_string());
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.repo.set(key, value) {
            log::warn!("[settings] could not persist {}: {:?}", key, e);
        }
    }
}
