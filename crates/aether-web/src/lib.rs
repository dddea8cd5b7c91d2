#![cfg(target_arch = "wasm32")]
//! Composition root for the web frontend.
//!
//! Owns the published section index and wires the two external pacers
//! together: the scroll listener (tracker + nav highlight) and the
//! requestAnimationFrame loop (interpolator + renderer).

mod carousel;
mod constants;
mod dom;
mod events;
mod frame;
mod markup;
mod nav;
mod render;

use std::cell::RefCell;
use std::rc::Rc;

use aether_core::{
    section_configs, validate_configs, Camera, SceneAnimator, Section, SECTION_COUNT, SERVICES,
    WORKS,
};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::constants::{
    CANVAS_ID, NAV_DOTS_ID, NAV_LINKS_ID, SCROLL_CONTAINER_ID, SERVICES_GRID_ID, WORK_STRIP_ID,
};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("aether-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    // Section table is fixed at startup; a malformed table is fatal here and
    // assumed valid everywhere after.
    let configs = section_configs();
    validate_configs(&configs)?;

    // Inject the dynamic content before wiring any listeners to it.
    inject_content(&document);

    // The one owner of the published section index. The scroll handler is the
    // only writer; the frame loop and nav highlight are read-only observers.
    let current_section = Rc::new(RefCell::new(0_i32));

    let container = document
        .get_element_by_id(SCROLL_CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SCROLL_CONTAINER_ID))?;
    events::wire_section_tracking(&container, &document, current_section.clone());
    events::wire_nav(&document);
    events::wire_carousel(&document);
    nav::highlight(&document, 0);

    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("WebGPU unavailable; page continues without the background scene");
    }

    let animator = SceneAnimator::new(&configs[0]);
    let camera = Camera::new(canvas.width() as f32 / canvas.height().max(1) as f32);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        configs,
        current_section,
        animator,
        camera,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    log::info!("aether-web ready: {} sections wired", SECTION_COUNT);
    Ok(())
}

fn inject_content(document: &web::Document) {
    let mounts = [
        (NAV_LINKS_ID, markup::nav_links_html(&Section::ALL)),
        (NAV_DOTS_ID, markup::nav_dots_html(SECTION_COUNT)),
        (SERVICES_GRID_ID, markup::service_cards_html(&SERVICES)),
        (WORK_STRIP_ID, markup::work_cards_html(&WORKS)),
    ];
    for (id, html) in mounts {
        match document.get_element_by_id(id) {
            Some(el) => el.set_inner_html(&html),
            None => log::warn!("missing content mount #{}", id),
        }
    }
}
