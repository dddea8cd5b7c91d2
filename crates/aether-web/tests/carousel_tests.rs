// Host-side tests for the carousel's pure math.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod carousel {
    include!("../src/carousel.rs");
}

use carousel::*;

#[test]
fn scroll_amount_is_eighty_percent_of_the_view() {
    let amount = scroll_amount(1000.0, SlideDirection::Right);
    assert!((amount - 800.0).abs() < 1e-9);
    assert!((CAROUSEL_SCROLL_RATIO - 0.8).abs() < 1e-9);
}

#[test]
fn scroll_amount_signs_follow_direction() {
    assert!(scroll_amount(640.0, SlideDirection::Right) > 0.0);
    assert!(scroll_amount(640.0, SlideDirection::Left) < 0.0);
    assert_eq!(
        scroll_amount(640.0, SlideDirection::Right),
        -scroll_amount(640.0, SlideDirection::Left)
    );
}

#[test]
fn scroll_amount_degenerates_to_zero_with_no_width() {
    assert_eq!(scroll_amount(0.0, SlideDirection::Right), 0.0);
    assert_eq!(scroll_amount(0.0, SlideDirection::Left), -0.0);
}
