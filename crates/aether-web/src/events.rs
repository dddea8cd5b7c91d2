//! Event wiring: scroll tracking, nav clicks, carousel buttons.
//!
//! All listeners run to completion synchronously; the only shared state they
//! touch is the `Rc<RefCell<i32>>` section index owned by the composition
//! root, which the frame loop re-reads on its own timeline.

use std::cell::RefCell;
use std::rc::Rc;

use aether_core::{section_index, SECTION_COUNT};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::carousel::{self, SlideDirection};
use crate::constants::{
    nav_dot_id, nav_link_id, section_dom_id, WORK_NEXT_ID, WORK_PREV_ID, WORK_STRIP_ID,
};
use crate::{dom, nav};

/// Recompute the section index from the container's scroll offset and publish
/// it: index store first, then the nav-highlight observer.
pub fn handle_scroll(
    container: &web::Element,
    document: &web::Document,
    current_section: &Rc<RefCell<i32>>,
) {
    let offset = container.scroll_top() as f32;
    let viewport = dom::window_inner_height().unwrap_or(1.0) as f32;
    let index = section_index(offset, viewport);
    *current_section.borrow_mut() = index;
    nav::highlight(document, index);
}

/// Attach the scroll listener that drives the section tracker.
pub fn wire_section_tracking(
    container: &web::Element,
    document: &web::Document,
    current_section: Rc<RefCell<i32>>,
) {
    let target = container.clone();
    let doc = document.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        handle_scroll(&target, &doc, &current_section);
    }) as Box<dyn FnMut()>);
    let _ = container.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Smooth-scroll a section into view (nav links and side dots).
pub fn scroll_to_section(document: &web::Document, index: usize) {
    if let Some(section) = document.get_element_by_id(&section_dom_id(index)) {
        let options = web::ScrollIntoViewOptions::new();
        options.set_behavior(web::ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Wire every nav link and side dot to scroll its section into view.
pub fn wire_nav(document: &web::Document) {
    for i in 0..SECTION_COUNT {
        for id in [nav_link_id(i), nav_dot_id(i)] {
            let doc = document.clone();
            dom::add_click_listener(document, &id, move || scroll_to_section(&doc, i));
        }
    }
}

/// Wire the work carousel's previous/next buttons.
pub fn wire_carousel(document: &web::Document) {
    for (button_id, direction) in [
        (WORK_PREV_ID, SlideDirection::Left),
        (WORK_NEXT_ID, SlideDirection::Right),
    ] {
        let doc = document.clone();
        dom::add_click_listener(document, button_id, move || {
            if let Some(strip) = doc.get_element_by_id(WORK_STRIP_ID) {
                carousel::scroll_work(&strip, direction);
            }
        });
    }
}
