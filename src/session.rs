use crate::audio::{BackgroundMusic, WebToneOutput};
use crate::constants::*;
use crate::core::{
    AudioSettingsStore, DrawPoint, FreehandSurface, GameCue, HeartGame, LookupError,
    ModelCatalog, NavCommand, SfxEngine, SlideDeck, Swipe, SwipeTracker, HEART_LIFETIME_MS,
    MODEL_CATALOG,
};
use crate::render::{self, CanvasRaster};
use crate::storage::LocalStorage;
use crate::{dom, overlay};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Owns every interactive component of the page. Handlers run one at a time on
/// the UI thread, so `RefCell` borrows never overlap across callbacks.
pub struct Session {
    pub document: web::Document,
    pub deck: RefCell<SlideDeck>,
    pub swipe: RefCell<SwipeTracker>,
    pub game: RefCell<HeartGame>,
    pub surface: Option<RefCell<FreehandSurface<CanvasRaster>>>,
    pub catalog: ModelCatalog,
    pub settings: RefCell<AudioSettingsStore<LocalStorage>>,
    pub sfx: RefCell<SfxEngine<WebToneOutput>>,
    pub music: Option<BackgroundMusic>,
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

impl Session {
    pub fn new(document: web::Document) -> Rc<Self> {
        let catalog = ModelCatalog::new(MODEL_CATALOG).unwrap_or_else(|e| {
            log::error!("[catalog] {}", e);
            ModelCatalog::unchecked(MODEL_CATALOG)
        });

        let surface = dom::element_by_id::<web::HtmlCanvasElement>(&document, DRAW_CANVAS_ID)
            .and_then(CanvasRaster::new)
            .map(|raster| RefCell::new(FreehandSurface::new(raster)))
            .map_err(|e| log::warn!("[draw] drawing disabled: {:?}", e))
            .ok();

        let music = BackgroundMusic::new(MUSIC_TRACK_URL)
            .map_err(|e| log::warn!("[music] background music disabled: {:?}", e))
            .ok();

        let settings = AudioSettingsStore::load(LocalStorage::open());
        let session = Rc::new(Self {
            document,
            deck: RefCell::new(SlideDeck::default()),
            swipe: RefCell::new(SwipeTracker::default()),
            game: RefCell::new(HeartGame::new(random_seed())),
            surface,
            catalog,
            settings: RefCell::new(settings),
            sfx: RefCell::new(SfxEngine::new(Box::new(WebToneOutput::open), random_seed())),
            music,
        });
        session.resize_surface();
        session.apply_settings();
        session.render_all();
        session
    }

    pub fn render_all(&self) {
        render::render_slide(&self.document, &self.deck.borrow());
        {
            let game = self.game.borrow();
            render::render_game(&self.document, &game);
            render::render_hearts(&self.document, game.particles());
        }
        render::render_settings(&self.document, self.settings.borrow().settings());
    }

    // ---------------- Slides ----------------

    pub fn navigate(&self, cmd: NavCommand) {
        let moved = self.deck.borrow_mut().apply(cmd);
        if moved {
            let s = self.settings.borrow().settings();
            self.sfx.borrow_mut().play_navigation(s.sfx_enabled, s.volume);
            let slide = self.deck.borrow().content();
            render::render_slide(&self.document, &self.deck.borrow());
            // a hidden canvas measures 0x0, so size it once it is on screen
            if slide.hosts_drawing_surface() {
                self.resize_surface();
            }
        }
    }

    pub fn swipe_start(&self, x: f32) {
        self.swipe.borrow_mut().begin(x);
    }

    pub fn swipe_end(&self, x: f32) {
        let gesture = self.swipe.borrow_mut().end(x);
        match gesture {
            Some(Swipe::Left) => self.navigate(NavCommand::Next),
            Some(Swipe::Right) => self.navigate(NavCommand::Prev),
            None => {}
        }
    }

    // ---------------- Heart game ----------------

    pub fn heart_tap(self: &Rc<Self>, x: f32, y: f32) {
        let outcome = self.game.borrow_mut().tap(x, y);
        let Some(outcome) = outcome else {
            return;
        };
        let s = self.settings.borrow().settings();
        for cue in &outcome.cues {
            let mut sfx = self.sfx.borrow_mut();
            match cue {
                GameCue::Tap => sfx.play_tap(s.sfx_enabled, s.volume),
                GameCue::Completion => sfx.play_completion(s.sfx_enabled, s.volume),
            };
        }
        {
            let game = self.game.borrow();
            render::render_game(&self.document, &game);
            render::append_hearts(&self.document, game.batch_particles(&outcome.batch));
        }

        let session = self.clone();
        let batch = outcome.batch;
        dom::set_timeout(HEART_LIFETIME_MS, move || {
            session.game.borrow_mut().remove_particles(&batch);
            render::remove_hearts(&session.document, &batch);
        });
    }

    pub fn reset_game(&self) {
        self.game.borrow_mut().reset();
        let game = self.game.borrow();
        render::render_game(&self.document, &game);
        render::render_hearts(&self.document, game.particles());
    }

    // ---------------- Drawing + model lookup ----------------

    pub fn with_surface(&self, f: impl FnOnce(&mut FreehandSurface<CanvasRaster>)) {
        if let Some(surface) = &self.surface {
            f(&mut surface.borrow_mut());
        }
    }

    pub fn draw_engage(&self, at: DrawPoint) {
        self.with_surface(|s| s.engage(at));
    }

    pub fn draw_move(&self, to: DrawPoint) {
        self.with_surface(|s| s.move_to(to));
    }

    pub fn draw_release(&self) {
        self.with_surface(|s| s.release());
    }

    pub fn resize_surface(&self) {
        self.with_surface(|s| {
            let (w, h, dpr) = dom::css_size_and_ratio(s.raster().canvas());
            s.resize(w, h, dpr);
        });
    }

    pub fn submit_name(&self, input: &str) {
        match self.catalog.lookup(input) {
            Ok(entry) => {
                log::info!("[model] showing {}", entry.display_name);
                if let Some(viewer) = self.document.get_element_by_id(MODEL_VIEWER_ID) {
                    for (name, value) in [("src", entry.asset_id), ("alt", entry.display_name)] {
                        if let Err(e) = viewer.set_attribute(name, value) {
                            log::warn!("[model] could not set {}: {:?}", name, e);
                        }
                    }
                }
                dom::set_text(
                    &self.document,
                    MODEL_CAPTION_ID,
                    self.catalog.display_name(entry.asset_id),
                );
                overlay::set_message(&self.document, NAME_MESSAGE_ID, "");
                let s = self.settings.borrow().settings();
                self.sfx.borrow_mut().play_tap(s.sfx_enabled, s.volume);
            }
            Err(LookupError::EmptyInput) => {
                overlay::set_message(&self.document, NAME_MESSAGE_ID, &LookupError::EmptyInput.to_string());
            }
            Err(e @ LookupError::NotFound(_)) => {
                log::debug!("[model] {}", e);
                overlay::set_message(&self.document, NAME_MESSAGE_ID, &self.catalog.suggestion_message());
            }
        }
    }

    pub fn reset_model_slide(&self) {
        if let Ok(input) = dom::element_by_id::<web::HtmlInputElement>(&self.document, NAME_INPUT_ID) {
            input.set_value("");
        }
        if let Some(viewer) = self.document.get_element_by_id(MODEL_VIEWER_ID) {
            if let Err(e) = viewer.remove_attribute("src") {
                log::warn!("[model] could not clear viewer: {:?}", e);
            }
        }
        dom::set_text(&self.document, MODEL_CAPTION_ID, "");
        overlay::set_message(&self.document, NAME_MESSAGE_ID, "");
        self.with_surface(|s| s.clear());
    }

    // ---------------- Audio settings ----------------

    fn apply_settings(&self) {
        let s = self.settings.borrow().settings();
        if let Some(music) = &self.music {
            music.apply(s);
        }
        render::render_settings(&self.document, s);
    }

    pub fn set_music_enabled(&self, enabled: bool) {
        self.settings.borrow_mut().set_music_enabled(enabled);
        self.apply_settings();
    }

    pub fn set_volume(&self, volume: f32) {
        self.settings.borrow_mut().set_volume(volume);
        self.apply_settings();
    }

    pub fn set_sfx_enabled(&self, enabled: bool) {
        self.settings.borrow_mut().set_sfx_enabled(enabled);
        self.apply_settings();
    }

    /// Any click or touch on the page.
    pub fn on_gesture(&self) {
        if let Some(music) = &self.music {
            music.retry_on_gesture(self.settings.borrow().settings().music_enabled);
        }
    }
}
