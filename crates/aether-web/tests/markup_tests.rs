// Host-side tests for the content HTML builders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod markup {
    include!("../src/markup.rs");
}

use aether_core::{Section, SECTION_COUNT, SERVICES, WORKS};
use constants::{nav_dot_id, nav_link_id};
use markup::*;

#[test]
fn nav_links_render_one_button_per_section_in_order() {
    let html = nav_links_html(&Section::ALL);
    assert_eq!(html.matches("<button").count(), SECTION_COUNT);
    for (i, section) in Section::ALL.iter().enumerate() {
        assert!(html.contains(section.label()), "missing {}", section.label());
        assert!(html.contains(&nav_link_id(i)), "missing id for {i}");
    }
    // Scroll order is preserved.
    let home = html.find("Home").unwrap();
    let contact = html.find("Contact").unwrap();
    assert!(home < contact);
}

#[test]
fn nav_dots_carry_ids_the_highlighter_looks_up() {
    let html = nav_dots_html(SECTION_COUNT);
    assert_eq!(html.matches("<button").count(), SECTION_COUNT);
    for i in 0..SECTION_COUNT {
        assert!(html.contains(&nav_dot_id(i)));
    }
}

#[test]
fn service_cards_cover_the_whole_table() {
    let html = service_cards_html(&SERVICES);
    assert_eq!(html.matches("service-card").count(), SERVICES.len());
    for s in &SERVICES {
        assert!(html.contains(s.title));
        assert!(html.contains(s.description));
        assert!(html.contains(&format!("icon-{}", s.icon)));
    }
}

#[test]
fn work_cards_cover_the_whole_table_and_end_with_a_spacer() {
    let html = work_cards_html(&WORKS);
    assert_eq!(html.matches(r#"class="work-card""#).count(), WORKS.len());
    for w in &WORKS {
        assert!(html.contains(w.title));
        assert!(html.contains(w.category));
        assert!(html.contains(w.image));
    }
    assert!(html.ends_with(r#"<div class="work-spacer"></div>"#));
}
