// Horizontal work-strip scrolling, independent of the section core.

use web_sys as web;

/// The strip advances by this fraction of its visible width per click.
pub const CAROUSEL_SCROLL_RATIO: f64 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

/// Signed horizontal scroll step for one carousel click.
#[inline]
pub fn scroll_amount(client_width: f64, direction: SlideDirection) -> f64 {
    let step = client_width * CAROUSEL_SCROLL_RATIO;
    match direction {
        SlideDirection::Left => -step,
        SlideDirection::Right => step,
    }
}

/// Slide the work strip one step with smooth scrolling.
pub fn scroll_work(strip: &web::Element, direction: SlideDirection) {
    let amount = scroll_amount(strip.client_width() as f64, direction);
    let options = web::ScrollToOptions::new();
    options.set_left(amount);
    options.set_behavior(web::ScrollBehavior::Smooth);
    strip.scroll_by_with_scroll_to_options(&options);
}
