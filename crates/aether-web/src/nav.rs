//! Navigation highlighting: a read-only observer of the published section
//! index, invoked by the scroll handler after every update.

use aether_core::{resolve_section, SECTION_COUNT};
use web_sys as web;

use crate::constants::{nav_dot_id, nav_link_id};

/// Mark the nav link and side dot matching the published index as active.
/// Out-of-range indices highlight the nearest section, mirroring the clamp
/// the interpolator applies.
pub fn highlight(document: &web::Document, index: i32) {
    let active = resolve_section(index);
    for i in 0..SECTION_COUNT {
        set_active(document, &nav_link_id(i), i == active);
        set_active(document, &nav_dot_id(i), i == active);
    }
}

fn set_active(document: &web::Document, id: &str, active: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        let classes = el.class_list();
        let _ = if active {
            classes.add_1("active")
        } else {
            classes.remove_1("active")
        };
    }
}
