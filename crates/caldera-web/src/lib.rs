#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, PARALLAX_SELECTOR};
use caldera_core::{SimConfig, VolcanoSim};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("caldera-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            // fatal startup precondition: report once, no partial fallback
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);
    events::wire_canvas_resize(&window, &canvas);

    // seed from the visit time so each session gets its own eruption schedule
    let seed = js_sys::Date::now() as u64;
    let sim = Rc::new(RefCell::new(VolcanoSim::new(SimConfig::default(), seed)?));
    log::info!(
        "simulation ready: {} embers, first charge at t={:.1}s",
        sim.borrow().embers.len(),
        sim.borrow().cycle.next_charge_at()
    );

    events::wire_pointer_move(&window, sim.clone());
    events::wire_shimmer(&document);
    events::wire_burst_interactions(&document);

    let gpu = frame::init_gpu(&canvas).await?;

    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let sections = frame::Sections::query(&document);
    let parallax = dom::collect_elements(&document, PARALLAX_SELECTOR);

    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        sim,
        canvas,
        body,
        sections,
        parallax,
        gpu,
    )));
    frame::start_loop(ctx);
    Ok(())
}
