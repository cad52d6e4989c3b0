// Shared gameplay/audio tuning constants used by the core and the web frontend.

// Heart game
pub const HEART_GOAL: u32 = 50; // score that latches the game into its complete state
pub const HEARTS_PER_TAP_MIN: u32 = 2;
pub const HEARTS_PER_TAP_MAX: u32 = 4; // inclusive
pub const HEART_JITTER: f32 = 20.0; // max offset from the tap point on each axis
pub const HEART_SIZE_MIN: f32 = 20.0;
pub const HEART_SIZE_MAX: f32 = 40.0;
pub const HEART_SPAWN_STAGGER_SEC: f32 = 0.1; // animation delay per index within a batch
pub const HEART_LIFETIME_MS: i32 = 2000; // visual lifetime before a batch is removed

pub const COMPLETION_MESSAGES: [&str; 4] = [
    "You've filled my heart with love! 💕",
    "Our love is complete! 💖",
    "Together we created magic! ✨",
    "Love is in the air! 🥰",
];

// Tone envelope
pub const ENVELOPE_PEAK_RATIO: f32 = 0.3; // peak gain = volume * ratio
pub const ENVELOPE_ATTACK_SEC: f64 = 0.01;
pub const ENVELOPE_FLOOR: f32 = 0.01; // exponential decay target (never reaches zero)
pub const ENVELOPE_MIN_DECAY_RATIO: f32 = 0.01; // floor never exceeds this share of the peak

// Navigation chirp: A4 then C#5
pub const NAV_NOTES_HZ: [f32; 2] = [440.0, 554.37];
pub const NAV_NOTE_SEC: f64 = 0.1;
pub const NAV_NOTE_GAP_SEC: f64 = 0.05;

// Tap pluck: C5 D5 E5 F5 G5
pub const TAP_NOTES_HZ: [f32; 5] = [523.25, 587.33, 659.25, 698.46, 783.99];
pub const TAP_NOTE_SEC: f64 = 0.15;

// Completion arpeggio: C5 E5 G5 C6
pub const COMPLETION_NOTES_HZ: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];
pub const COMPLETION_NOTE_SEC: f64 = 0.3;
pub const COMPLETION_NOTE_GAP_SEC: f64 = 0.1;

// Persisted settings
pub const STORAGE_KEY_MUSIC_ENABLED: &str = "romantic-music-enabled";
pub const STORAGE_KEY_VOLUME: &str = "romantic-music-volume";
pub const STORAGE_KEY_SFX_ENABLED: &str = "romantic-sfx-enabled";
pub const DEFAULT_VOLUME: f32 = 0.5;

// Drawing surface
pub const STROKE_COLOR: &str = "#e91e63";
pub const STROKE_WIDTH: f64 = 3.0;

// Slideshow
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
pub const MAX_LISTED_SUGGESTIONS: usize = 5;
