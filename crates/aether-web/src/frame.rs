use std::cell::RefCell;
use std::rc::Rc;

use aether_core::{
    build_instances, resolve_section, Camera, SceneAnimator, SectionConfig, SECTION_COUNT,
};
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext<'a> {
    pub configs: [SectionConfig; SECTION_COUNT],
    /// Published by the scroll handler; re-read (not cached) every frame.
    pub current_section: Rc<RefCell<i32>>,
    pub animator: SceneAnimator,
    pub camera: Camera,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Out-of-range indices from overscroll are neutralized here, never in
        // the tracker.
        let section = resolve_section(*self.current_section.borrow());
        let config = &self.configs[section];

        // Target-seeking pass, then the unconditional decorative pass.
        self.animator.seek_targets(config);
        self.animator.advance(dt_sec);
        self.camera.follow(&self.animator);

        let instances = build_instances(&self.animator);

        if let Some(g) = &mut self.gpu {
            let w = self.canvas.width();
            let h = self.canvas.height();
            g.resize_if_needed(w, h);
            self.camera.aspect = w as f32 / h.max(1) as f32;
            if let Err(e) = g.render(&self.camera, &self.animator, &instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
