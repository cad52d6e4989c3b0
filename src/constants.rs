// DOM element ids and browser-side tuning shared by the web modules.

// Slideshow chrome
pub const SLIDE_ROOT_ID: &str = "slideshow";
pub const SHAYARI_SLIDE_ID: &str = "shayari-slide";
pub const SHAYARI_LINES_ID: &str = "shayari-lines";
pub const GAME_SLIDE_ID: &str = "game-slide";
pub const MODEL_SLIDE_ID: &str = "model-slide";
pub const NAV_PREV_ID: &str = "nav-prev";
pub const NAV_NEXT_ID: &str = "nav-next";
pub const SLIDE_INDICATOR_ID: &str = "slide-indicator";

// Music controls panel
pub const MUSIC_BUTTON_ID: &str = "music-button";
pub const MUSIC_PANEL_ID: &str = "music-panel";
pub const MUSIC_SWITCH_ID: &str = "music-enabled";
pub const VOLUME_SLIDER_ID: &str = "music-volume";
pub const VOLUME_LABEL_ID: &str = "music-volume-label";
pub const SFX_SWITCH_ID: &str = "sfx-enabled";
pub const MUSIC_TRACK_URL: &str = "/assets/audio/tum-hi-ho.mp3";

// Drawing + name form
pub const DRAW_CANVAS_ID: &str = "draw-canvas";
pub const DRAW_CLEAR_ID: &str = "draw-clear";
pub const NAME_FORM_ID: &str = "name-form";
pub const NAME_INPUT_ID: &str = "name-input";
pub const NAME_MESSAGE_ID: &str = "name-message";
pub const NAME_RESET_ID: &str = "name-reset";
pub const MODEL_VIEWER_ID: &str = "model-viewer"; // external 3D viewer element, driven via `src`
pub const MODEL_CAPTION_ID: &str = "model-caption";

// Heart game
pub const GAME_SURFACE_ID: &str = "game-surface";
pub const HEART_LAYER_ID: &str = "heart-layer";
pub const GAME_INTRO_ID: &str = "game-intro";
pub const GAME_PROGRESS_BAR_ID: &str = "game-progress-bar";
pub const GAME_PROGRESS_LABEL_ID: &str = "game-progress-label";
pub const GAME_COMPLETE_PANEL_ID: &str = "game-complete";
pub const GAME_COMPLETE_MESSAGE_ID: &str = "game-complete-message";
pub const GAME_COMPLETE_SCORE_ID: &str = "game-complete-score";
pub const GAME_RESET_ID: &str = "game-reset";
pub const HEART_IMAGE_URL: &str = "/assets/generated/heart-particles-pack.dim_128x128.png";

// CSS class toggled to hide panels
pub const HIDDEN_CLASS: &str = "hidden";
