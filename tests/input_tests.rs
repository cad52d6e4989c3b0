// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn surface_point_is_relative_to_box_origin() {
    assert_eq!(surface_point(110.0, 60.0, 100.0, 50.0), Vec2::new(10.0, 10.0));
    assert_eq!(surface_point(90.0, 40.0, 100.0, 50.0), Vec2::new(-10.0, -10.0));
}

#[test]
fn zero_touches_produce_no_point() {
    assert_eq!(first_sample(&[]), None);
}

#[test]
fn first_touch_wins() {
    let samples = [Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)];
    assert_eq!(first_sample(&samples), Some(Vec2::new(1.0, 2.0)));
}
