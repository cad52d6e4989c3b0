// Host-side tests for the freehand drawing state machine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod drawing {
    include!("../src/core/drawing.rs");
}

use drawing::*;
use glam::Vec2;

#[derive(Default)]
struct RecordingRaster {
    segments: Vec<(Vec2, Vec2)>,
    clears: usize,
    sizes: Vec<(u32, u32, f64)>,
}

impl Raster for RecordingRaster {
    fn draw_segment(&mut self, from: DrawPoint, to: DrawPoint) {
        self.segments.push((from, to));
    }
    fn clear(&mut self) {
        self.segments.clear();
        self.clears += 1;
    }
    fn resize(&mut self, width_px: u32, height_px: u32, pixel_ratio: f64) {
        self.segments.clear();
        self.sizes.push((width_px, height_px, pixel_ratio));
    }
}

fn surface() -> FreehandSurface<RecordingRaster> {
    FreehandSurface::new(RecordingRaster::default())
}

#[test]
fn stroke_produces_one_segment_per_move() {
    let mut s = surface();
    s.engage(Vec2::new(10.0, 10.0));
    s.move_to(Vec2::new(20.0, 10.0));
    s.move_to(Vec2::new(20.0, 30.0));
    s.release();

    assert_eq!(
        s.raster().segments,
        vec![
            (Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0)),
            (Vec2::new(20.0, 10.0), Vec2::new(20.0, 30.0)),
        ]
    );
    assert_eq!(s.state(), StrokeState::Idle);
}

#[test]
fn moves_while_idle_draw_nothing() {
    let mut s = surface();
    s.move_to(Vec2::new(1.0, 1.0));
    s.move_to(Vec2::new(2.0, 2.0));
    assert!(s.raster().segments.is_empty());

    s.engage(Vec2::new(0.0, 0.0));
    s.release();
    s.move_to(Vec2::new(5.0, 5.0));
    assert!(s.raster().segments.is_empty());
}

#[test]
fn release_forgets_last_point() {
    let mut s = surface();
    s.engage(Vec2::new(0.0, 0.0));
    s.move_to(Vec2::new(1.0, 0.0));
    s.release();
    s.engage(Vec2::new(50.0, 50.0));
    s.move_to(Vec2::new(60.0, 50.0));
    assert_eq!(
        s.raster().segments.last(),
        Some(&(Vec2::new(50.0, 50.0), Vec2::new(60.0, 50.0)))
    );
    assert_eq!(s.raster().segments.len(), 2);
}

#[test]
fn clear_erases_without_changing_pen_state() {
    let mut s = surface();
    s.engage(Vec2::new(10.0, 10.0));
    s.move_to(Vec2::new(20.0, 10.0));
    s.clear();
    assert!(s.raster().segments.is_empty());
    assert_eq!(s.raster().clears, 1);
    assert!(s.is_stroking());
    assert_eq!(
        s.state(),
        StrokeState::Stroking {
            last: Vec2::new(20.0, 10.0)
        }
    );

    s.move_to(Vec2::new(30.0, 10.0));
    assert_eq!(
        s.raster().segments,
        vec![(Vec2::new(20.0, 10.0), Vec2::new(30.0, 10.0))]
    );

    s.release();
    s.clear();
    assert!(!s.is_stroking());
}

#[test]
fn re_engaging_restarts_the_stroke() {
    let mut s = surface();
    s.engage(Vec2::new(0.0, 0.0));
    s.engage(Vec2::new(100.0, 100.0));
    s.move_to(Vec2::new(110.0, 100.0));
    assert_eq!(
        s.raster().segments,
        vec![(Vec2::new(100.0, 100.0), Vec2::new(110.0, 100.0))]
    );
}

#[test]
fn resize_scales_backing_store_by_pixel_ratio() {
    let mut s = surface();
    s.resize(300.0, 160.0, 2.0);
    s.resize(300.0, 160.0, 0.0);
    s.resize(0.0, 0.0, 1.0);
    assert_eq!(
        s.raster().sizes,
        vec![(600, 320, 2.0), (300, 160, 1.0), (1, 1, 1.0)]
    );
}
