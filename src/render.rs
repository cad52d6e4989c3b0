use crate::constants::*;
use crate::core::{
    AudioSettings, DrawPoint, HeartGame, HeartParticle, Raster, Slide, SlideDeck, HEART_GOAL,
    STROKE_COLOR, STROKE_WIDTH,
};
use crate::dom;
use crate::overlay;
use std::fmt::Write as _;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

// ---------------- Freehand canvas ----------------

/// 2D canvas raster for the freehand surface.
pub struct CanvasRaster {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRaster {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let raster = Self { canvas, ctx };
        raster.apply_pen();
        Ok(raster)
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    // Resizing the canvas resets context state, so the pen is re-applied afterwards
    fn apply_pen(&self) {
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&JsValue::from_str(STROKE_COLOR));
        self.ctx.set_line_width(STROKE_WIDTH);
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }
}

impl Raster for CanvasRaster {
    fn draw_segment(&mut self, from: DrawPoint, to: DrawPoint) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn clear(&mut self) {
        self.ctx.save();
        _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.restore();
    }

    fn resize(&mut self, width_px: u32, height_px: u32, pixel_ratio: f64) {
        self.canvas.set_width(width_px);
        self.canvas.set_height(height_px);
        _ = self.ctx.scale(pixel_ratio, pixel_ratio);
        self.apply_pen();
    }
}

// ---------------- Slides ----------------

pub fn render_slide(document: &web::Document, deck: &SlideDeck) {
    let slide = deck.content();
    overlay::set_visible(document, SHAYARI_SLIDE_ID, matches!(slide, Slide::Shayari { .. }));
    overlay::set_visible(document, GAME_SLIDE_ID, slide == Slide::HeartGame);
    overlay::set_visible(document, MODEL_SLIDE_ID, slide == Slide::ModelViewer);

    if let Slide::Shayari { lines, background } = slide {
        if let Some(el) = document.get_element_by_id(SHAYARI_SLIDE_ID) {
            _ = el.set_attribute("style", &format!("background-image:url('{}')", background));
        }
        if let Some(el) = document.get_element_by_id(SHAYARI_LINES_ID) {
            let mut html = String::new();
            for line in lines.iter() {
                _ = write!(html, "<p class='shayari-line'>{}</p>", line);
            }
            el.set_inner_html(&html);
        }
    }

    overlay::set_visible(document, NAV_PREV_ID, !deck.is_first());
    overlay::set_visible(document, NAV_NEXT_ID, !deck.is_last());

    if let Some(el) = document.get_element_by_id(SLIDE_INDICATOR_ID) {
        let mut html = String::new();
        for i in 0..deck.total() {
            let class = if i == deck.current() { "dot active" } else { "dot" };
            _ = write!(html, "<span class='{}'></span>", class);
        }
        _ = write!(html, "<div class='slide-counter'>{}</div>", deck.position_label());
        el.set_inner_html(&html);
    }
}

// ---------------- Heart game ----------------

pub fn render_game(document: &web::Document, game: &HeartGame) {
    let state = game.state();
    if let Some(el) = document.get_element_by_id(GAME_PROGRESS_BAR_ID) {
        _ = el.set_attribute("style", &format!("width:{:.1}%", game.progress_percent()));
    }
    let label = if state.score > 0 {
        format!("{}/{}", state.score, HEART_GOAL)
    } else {
        String::new()
    };
    dom::set_text(document, GAME_PROGRESS_LABEL_ID, &label);

    overlay::set_visible(document, GAME_INTRO_ID, !state.is_complete);
    overlay::set_visible(document, GAME_COMPLETE_PANEL_ID, state.is_complete);
    dom::set_text(document, GAME_COMPLETE_MESSAGE_ID, state.completion_message);
    dom::set_text(
        document,
        GAME_COMPLETE_SCORE_ID,
        &format!("You collected {} hearts!", state.score),
    );
}

fn heart_element_id(id: u64) -> String {
    format!("heart-{}", id)
}

fn heart_html<'a>(particles: impl Iterator<Item = &'a HeartParticle>) -> String {
    let mut html = String::new();
    for p in particles {
        _ = write!(
            html,
            "<img id='{id}' class='heart-float' src='{src}' alt='' style='left:{x:.1}px;top:{y:.1}px;\
             width:{s:.1}px;height:{s:.1}px;transform:rotate({r:.1}deg);animation-delay:{d:.2}s'>",
            id = heart_element_id(p.id),
            src = HEART_IMAGE_URL,
            x = p.x,
            y = p.y,
            s = p.size,
            r = p.rotation_degrees,
            d = p.spawn_delay_seconds,
        );
    }
    html
}

/// Rebuild the whole particle layer. Only used on start-up and reset, since
/// recreating live nodes restarts their float animation.
pub fn render_hearts(document: &web::Document, particles: &[HeartParticle]) {
    if let Some(layer) = document.get_element_by_id(HEART_LAYER_ID) {
        layer.set_inner_html(&heart_html(particles.iter()));
    }
}

/// Append one tap's particles, leaving the ones already floating untouched.
pub fn append_hearts<'a>(
    document: &web::Document,
    particles: impl Iterator<Item = &'a HeartParticle>,
) {
    let Some(layer) = document.get_element_by_id(HEART_LAYER_ID) else {
        return;
    };
    if let Err(e) = layer.insert_adjacent_html("beforeend", &heart_html(particles)) {
        log::warn!("[game] could not add hearts: {:?}", e);
    }
}

/// Remove one batch's nodes; ids already gone are skipped.
pub fn remove_hearts(document: &web::Document, ids: &[u64]) {
    for &id in ids {
        if let Some(el) = document.get_element_by_id(&heart_element_id(id)) {
            el.remove();
        }
    }
}

// ---------------- Music controls ----------------

pub fn render_settings(document: &web::Document, settings: AudioSettings) {
    if let Ok(el) = dom::element_by_id::<web::HtmlInputElement>(document, MUSIC_SWITCH_ID) {
        el.set_checked(settings.music_enabled);
    }
    if let Ok(el) = dom::element_by_id::<web::HtmlInputElement>(document, SFX_SWITCH_ID) {
        el.set_checked(settings.sfx_enabled);
    }
    if let Ok(el) = dom::element_by_id::<web::HtmlInputElement>(document, VOLUME_SLIDER_ID) {
        el.set_value(&format!("{}", settings.volume));
        el.set_disabled(!settings.music_enabled);
    }
    dom::set_text(
        document,
        VOLUME_LABEL_ID,
        &format!("{}%", (settings.volume * 100.0).round() as i32),
    );
}
