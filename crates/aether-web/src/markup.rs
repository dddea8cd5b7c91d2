// HTML builders for the dynamic page content.
//
// Pure string construction, kept free of DOM calls so it can be tested on
// the host. The composition root injects the results with `set_inner_html`.

use aether_core::{Section, ServiceItem, WorkItem};

/// Nav bar buttons, one per section, in scroll order.
pub fn nav_links_html(sections: &[Section]) -> String {
    sections
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                r#"<button id="nav-link-{i}" class="nav-link" type="button">{}</button>"#,
                s.label()
            )
        })
        .collect()
}

/// Side dots mirroring the nav, one per section.
pub fn nav_dots_html(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(r#"<button id="nav-dot-{i}" class="nav-dot" type="button" aria-label="Go to section {}"></button>"#, i + 1)
        })
        .collect()
}

/// Service cards for the services grid.
pub fn service_cards_html(services: &[ServiceItem]) -> String {
    services
        .iter()
        .map(|s| {
            format!(
                concat!(
                    r#"<div class="service-card">"#,
                    r#"<div class="service-icon icon-{icon}"></div>"#,
                    r#"<h4>{title}</h4>"#,
                    r#"<p>{description}</p>"#,
                    r#"</div>"#
                ),
                icon = s.icon,
                title = s.title,
                description = s.description,
            )
        })
        .collect()
}

/// Work cards for the horizontal strip. A trailing spacer lets the last card
/// scroll fully into view.
pub fn work_cards_html(works: &[WorkItem]) -> String {
    let mut html: String = works
        .iter()
        .map(|w| {
            format!(
                concat!(
                    r#"<div class="work-card">"#,
                    r#"<img src="{image}" alt="{title}" loading="lazy">"#,
                    r#"<div class="work-card-overlay">"#,
                    r#"<span class="work-category">{category}</span>"#,
                    r#"<h4>{title}</h4>"#,
                    r#"</div>"#,
                    r#"</div>"#
                ),
                image = w.image,
                title = w.title,
                category = w.category,
            )
        })
        .collect();
    html.push_str(r#"<div class="work-spacer"></div>"#);
    html
}
