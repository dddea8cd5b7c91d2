//! Scroll offset → section index projection.
//!
//! The scroll container snaps one full viewport per section, so the active
//! section is simply the nearest multiple of the viewport height. Rounding
//! (rather than floor) switches sections at the midpoint of a transition,
//! which keeps crossings symmetric in both scroll directions.

use crate::config::SECTION_COUNT;

/// Project a scroll offset onto a section index.
///
/// Round-half-up: `f32::round` rounds half away from zero, which for the
/// non-negative offsets delivered by a scroll container is round-half-up.
/// The result is deliberately unclamped — overscroll past the last section
/// yields an out-of-range index, and consumers neutralize it with
/// [`resolve_section`]. Keeping the clamp out of the tracker leaves it a pure
/// projection of scroll position.
#[inline]
pub fn section_index(scroll_offset: f32, viewport_height: f32) -> i32 {
    (scroll_offset / viewport_height.max(1.0)).round() as i32
}

/// Clamp a published index into the section table's range.
#[inline]
pub fn resolve_section(index: i32) -> usize {
    index.clamp(0, SECTION_COUNT as i32 - 1) as usize
}
