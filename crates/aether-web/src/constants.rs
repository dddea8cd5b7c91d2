// DOM mount points the frontend binds to. index.html provides these ids.

pub const CANVAS_ID: &str = "scene-canvas";
pub const SCROLL_CONTAINER_ID: &str = "scroll-container";
pub const NAV_LINKS_ID: &str = "nav-links";
pub const NAV_DOTS_ID: &str = "nav-dots";
pub const SERVICES_GRID_ID: &str = "services-grid";
pub const WORK_STRIP_ID: &str = "work-strip";
pub const WORK_PREV_ID: &str = "work-prev";
pub const WORK_NEXT_ID: &str = "work-next";

#[inline]
pub fn section_dom_id(index: usize) -> String {
    format!("section-{index}")
}

#[inline]
pub fn nav_link_id(index: usize) -> String {
    format!("nav-link-{index}")
}

#[inline]
pub fn nav_dot_id(index: usize) -> String {
    format!("nav-dot-{index}")
}
