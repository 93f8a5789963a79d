use crate::constants::{CARD_SELECTOR, CTA_SELECTOR, SHIMMER_SELECTOR};
use crate::dom;
use crate::input;
use caldera_core::VolcanoSim;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store in sync with its CSS size on resize.
pub fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Window-level pointer tracking feeding the camera target.
pub fn wire_pointer_move(window: &web::Window, sim: Rc<RefCell<VolcanoSim>>) {
    let window_for_norm = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let [nx, ny] = input::pointer_window_norm(&ev, &window_for_norm);
        sim.borrow_mut().set_pointer_norm(nx, ny);
    }) as Box<dyn FnMut(_)>);
    let _ =
        window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Per-element heat shimmer: pointer position becomes `--pointer-x/y`.
pub fn wire_shimmer(document: &web::Document) {
    for el in dom::collect_elements(document, SHIMMER_SELECTOR) {
        let target = el.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let rect = target.get_bounding_client_rect();
            let (x, y) =
                input::pointer_element_pct(ev.client_x() as f32, ev.client_y() as f32, &rect);
            dom::set_pointer_vars(&target, x, y);
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// DOM ember bursts: card hover gets the full burst, CTA and pill clicks the
/// compact one.
pub fn wire_burst_interactions(document: &web::Document) {
    for el in dom::collect_elements(document, CARD_SELECTOR) {
        attach_burst(document, &el, "pointerenter", false);
    }
    for el in dom::collect_elements(document, CTA_SELECTOR) {
        attach_burst(document, &el, "click", true);
    }
    for el in dom::collect_elements(document, ".social-pill") {
        attach_burst(document, &el, "click", true);
    }
}

fn attach_burst(document: &web::Document, el: &web::HtmlElement, event: &str, compact: bool) {
    let doc = document.clone();
    let host: web::Element = el.clone().into();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        dom::spawn_ember_burst(
            &doc,
            &host,
            ev.client_x() as f32,
            ev.client_y() as f32,
            compact,
        );
    }) as Box<dyn FnMut(_)>);
    let _ = el.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
