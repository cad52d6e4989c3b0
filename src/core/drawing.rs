use glam::Vec2;

/// Surface-local coordinates of an input sample.
pub type DrawPoint = Vec2;

/// 2D raster the drawing surface renders into.
pub trait Raster {
    /// Stroke one straight segment with the surface's pen style.
    fn draw_segment(&mut self, from: DrawPoint, to: DrawPoint);
    /// Erase everything drawn so far.
    fn clear(&mut self);
    /// Resize the backing store to `width_px` x `height_px` device pixels,
    /// drawing in CSS units scaled by `pixel_ratio`. Existing content may be lost.
    fn resize(&mut self, width_px: u32, height_px: u32, pixel_ratio: f64);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeState {
    Idle,
    Stroking { last: DrawPoint },
}

/// Pen-down/pen-up state machine joining consecutive samples with segments.
pub struct FreehandSurface<R: Raster> {
    raster: R,
    state: StrokeState,
}

impl<R: Raster> FreehandSurface<R> {
    pub fn new(raster: R) -> Self {
        Self {
            raster,
            state: StrokeState::Idle,
        }
    }

    pub fn state(&self) -> StrokeState {
        self.state
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.state, StrokeState::Stroking { .. })
    }

    pub fn raster(&self) -> &R {
        &self.raster
    }

    /// Mouse-down / touch-start. Re-engaging mid-stroke restarts at `at`.
    pub fn engage(&mut self, at: DrawPoint) {
        self.state = StrokeState::Stroking { last: at };
    }

    /// Mouse-move / touch-move. Ignored while idle.
    pub fn move_to(&mut self, to: DrawPoint) {
        if let StrokeState::Stroking { last } = self.state {
            self.raster.draw_segment(last, to);
            self.state = StrokeState::Stroking { last: to };
        }
    }

    /// Pointer up or pointer leaving the surface.
    pub fn release(&mut self) {
        self.state = StrokeState::Idle;
    }

    /// Erase all strokes; the pen state is left untouched.
    pub fn clear(&mut self) {
        self.raster.clear();
    }

    pub fn resize(&mut self, css_width: f64, css_height: f64, pixel_ratio: f64) {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
            pixel_ratio
        } else {
            1.0
        };
        let w = (css_width * ratio).max(1.0) as u32;
        let h = (css_height * ratio).max(1.0) as u32;
        log::debug!("[draw] resize backing store to {}x{} (dpr {:.2})", w, h, ratio);
        self.raster.resize(w, h, ratio);
    }
}
