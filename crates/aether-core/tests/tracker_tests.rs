// Host-side tests for the scroll → section projection.

use aether_core::{resolve_section, section_index, SECTION_COUNT};

#[test]
fn section_index_rounds_to_nearest_section() {
    // One section per 800px viewport.
    assert_eq!(section_index(0.0, 800.0), 0);
    assert_eq!(section_index(399.0, 800.0), 0);
    assert_eq!(section_index(401.0, 800.0), 1);
    assert_eq!(section_index(799.0, 800.0), 1);
    assert_eq!(section_index(1199.0, 800.0), 1);
    assert_eq!(section_index(2000.0, 800.0), 3);
}

#[test]
fn section_index_ties_round_half_up() {
    // Exactly half a viewport switches to the next section.
    assert_eq!(section_index(400.0, 800.0), 1);
    assert_eq!(section_index(1200.0, 800.0), 2);
    assert_eq!(section_index(2800.0, 800.0), 4);
}

#[test]
fn section_index_is_unclamped_past_the_last_section() {
    // Overscroll publishes a raw out-of-range index; consumers clamp.
    assert_eq!(section_index(4000.0, 800.0), 5);
    assert!(section_index(4000.0, 800.0) as usize >= SECTION_COUNT);
}

#[test]
fn section_index_survives_a_degenerate_viewport() {
    // A zero-height viewport must not divide by zero.
    let idx = section_index(100.0, 0.0);
    assert_eq!(idx, 100);
}

#[test]
fn resolve_section_clamps_into_table_range() {
    assert_eq!(resolve_section(-3), 0);
    assert_eq!(resolve_section(0), 0);
    assert_eq!(resolve_section(3), 3);
    assert_eq!(resolve_section(7), 3);
}

#[test]
fn resolve_section_is_idempotent() {
    for i in -10..20 {
        let once = resolve_section(i);
        assert_eq!(resolve_section(once as i32), once, "index {i}");
    }
}
