use crate::constants::{
    BASALT_SELECTOR, HERO_SELECTOR, PORTFOLIO_SELECTOR, PUMICE_SELECTOR, TUBE_SELECTOR,
};
use crate::dom;
use crate::render;
use caldera_core::scroll::{
    hero_progress, region_progress, BASALT_REGION, HERO_REGION, PORTFOLIO_REGION, PUMICE_REGION,
    TUBE_REGION,
};
use caldera_core::{build_sprite_instances, SimEvent, SimEvents, SpriteInstance, VolcanoSim};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page sections backing the named scroll regions. Sections missing from
/// the document simply contribute no progress.
pub struct Sections {
    hero: Option<web::Element>,
    portfolio: Option<web::Element>,
    tube: Option<web::Element>,
    basalt: Option<web::Element>,
    pumice: Option<web::Element>,
}

impl Sections {
    pub fn query(document: &web::Document) -> Self {
        let find = |sel: &str| document.query_selector(sel).ok().flatten();
        Self {
            hero: find(HERO_SELECTOR),
            portfolio: find(PORTFOLIO_SELECTOR),
            tube: find(TUBE_SELECTOR),
            basalt: find(BASALT_SELECTOR),
            pumice: find(PUMICE_SELECTOR),
        }
    }

    /// Recompute every region's progress from live layout and feed the sim.
    fn feed(&self, sim: &mut VolcanoSim, viewport_h: f32) {
        if let Some(el) = &self.hero {
            let (top, height) = dom::section_metrics(el);
            sim.set_region_progress(HERO_REGION, hero_progress(top, height));
        }
        let spans = [
            (&self.portfolio, PORTFOLIO_REGION),
            (&self.tube, TUBE_REGION),
            (&self.basalt, BASALT_REGION),
            (&self.pumice, PUMICE_REGION),
        ];
        for (el, region) in spans {
            if let Some(el) = el {
                let (top, height) = dom::section_metrics(el);
                sim.set_region_progress(region, region_progress(top, height, viewport_h));
            }
        }
    }
}

pub struct FrameContext<'a> {
    pub sim: Rc<RefCell<VolcanoSim>>,
    pub canvas: web::HtmlCanvasElement,
    pub body: web::HtmlElement,
    pub sections: Sections,
    pub parallax: Vec<web::HtmlElement>,
    pub gpu: render::GpuState<'a>,

    pub last_instant: Instant,
    events: SimEvents,
    instances: Vec<SpriteInstance>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        sim: Rc<RefCell<VolcanoSim>>,
        canvas: web::HtmlCanvasElement,
        body: web::HtmlElement,
        sections: Sections,
        parallax: Vec<web::HtmlElement>,
        gpu: render::GpuState<'a>,
    ) -> Self {
        Self {
            sim,
            canvas,
            body,
            sections,
            parallax,
            gpu,
            last_instant: Instant::now(),
            events: SimEvents::new(),
            instances: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let Some(window) = web::window() else {
            return;
        };
        let viewport_h = dom::viewport_height(&window);

        let mut sim = self.sim.borrow_mut();
        self.sections.feed(&mut sim, viewport_h);

        self.events.clear();
        sim.tick(dt, &mut self.events);
        for ev in &self.events {
            let SimEvent::Eruption {
                fragments,
                meteorites,
            } = ev;
            log::info!("eruption: {fragments} fragments, {meteorites} meteorites");
        }

        dom::apply_shake(&self.body, sim.shake.offset(), sim.shake.is_active());
        dom::update_parallax(&self.parallax, dom::scroll_y(&window));

        build_sprite_instances(&sim, &mut self.instances);
        let params = render::SceneParams {
            time: sim.elapsed() as f32,
            pressure: sim.cycle.pressure(),
            cam_rot: sim.camera.rotation(),
            visuals: sim.visuals(),
            breathing: sim.breathing(),
            tunnel: sim.bindings.tunnel(),
            basalt: sim.bindings.basalt_rise(),
            pumice: sim.bindings.pumice_offset(),
        };
        drop(sim);

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(&params, &self.instances) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas).await
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
