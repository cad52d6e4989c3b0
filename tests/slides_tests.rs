// Host-side tests for slide navigation, swipes and key bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod shayari {
    include!("../src/core/shayari.rs");
}
mod slides {
    include!("../src/core/slides.rs");
}

use shayari::*;
use slides::*;

#[test]
fn deck_is_shayari_then_game_then_model() {
    let mut deck = SlideDeck::default();
    assert_eq!(deck.total(), SHAYARI_COLLECTION.len() + 2);
    for i in 0..SHAYARI_COLLECTION.len() {
        match deck.content() {
            Slide::Shayari { lines, background } => {
                assert_eq!(lines, &SHAYARI_COLLECTION[i]);
                assert_eq!(background, BACKGROUNDS[i % 2]);
            }
            other => panic!("slide {i} should be a shayari, got {other:?}"),
        }
        assert!(deck.next());
    }
    assert_eq!(deck.content(), Slide::HeartGame);
    assert!(deck.next());
    assert_eq!(deck.content(), Slide::ModelViewer);
    assert!(deck.is_last());
}

#[test]
fn navigation_stays_in_bounds() {
    let mut deck = SlideDeck::default();
    assert!(deck.is_first());
    assert!(!deck.prev());
    assert!(!deck.go_to(deck.total()));
    assert!(!deck.go_to(0), "already on slide 0");
    assert_eq!(deck.current(), 0);

    assert!(deck.apply(NavCommand::Last));
    assert_eq!(deck.current(), deck.total() - 1);
    assert!(!deck.next());
    assert!(deck.prev());
    assert!(deck.apply(NavCommand::First));
    assert_eq!(deck.current(), 0);
}

#[test]
fn every_shayari_has_four_non_empty_lines() {
    for (i, s) in SHAYARI_COLLECTION.iter().enumerate() {
        assert!(s.iter().all(|l| !l.trim().is_empty()), "shayari {i}");
    }
}

#[test]
fn swipe_needs_more_than_threshold() {
    let mut t = SwipeTracker::default();
    t.begin(200.0);
    assert_eq!(t.end(150.0), None, "exactly 50px is not a swipe");
    t.begin(200.0);
    assert_eq!(t.end(149.0), Some(Swipe::Left));
    t.begin(100.0);
    assert_eq!(t.end(180.0), Some(Swipe::Right));
}

#[test]
fn swipe_end_without_start_is_ignored() {
    let mut t = SwipeTracker::default();
    assert_eq!(t.end(0.0), None);
    t.begin(300.0);
    assert_eq!(t.end(0.0), Some(Swipe::Left));
    assert_eq!(t.end(0.0), None, "start is consumed");
}

#[test]
fn key_bindings() {
    assert_eq!(nav_for_key("ArrowRight"), Some(NavCommand::Next));
    assert_eq!(nav_for_key(" "), Some(NavCommand::Next));
    assert_eq!(nav_for_key("PageDown"), Some(NavCommand::Next));
    assert_eq!(nav_for_key("ArrowLeft"), Some(NavCommand::Prev));
    assert_eq!(nav_for_key("PageUp"), Some(NavCommand::Prev));
    assert_eq!(nav_for_key("Home"), Some(NavCommand::First));
    assert_eq!(nav_for_key("End"), Some(NavCommand::Last));
    assert_eq!(nav_for_key("a"), None);
}

#[test]
fn only_the_model_slide_hosts_the_drawing_surface() {
    let mut deck = SlideDeck::default();
    assert!(!deck.content().hosts_drawing_surface());
    assert!(deck.apply(NavCommand::Last));
    assert_eq!(deck.content(), Slide::ModelViewer);
    assert!(deck.content().hosts_drawing_surface());
    assert!(deck.prev());
    assert!(!deck.content().hosts_drawing_surface());
}

#[test]
fn position_label_counts_from_one() {
    let mut deck = SlideDeck::default();
    let total = SHAYARI_COLLECTION.len() + ENDING_SLIDES;
    assert_eq!(deck.position_label(), format!("1 / {total}"));
    deck.apply(NavCommand::Last);
    assert_eq!(deck.position_label(), format!("{total} / {total}"));
}
