use crate::constants::{EMBER_BURST_LIFETIME_MS, ERUPTION_CLASS, PARALLAX_DEPTH_STEP};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn viewport_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Top edge (relative to the viewport) and height of a section, CSS pixels.
#[inline]
pub fn section_metrics(el: &web::Element) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    (rect.top() as f32, rect.height() as f32)
}

pub fn collect_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(node) = list.item(i) {
                if let Ok(el) = node.dyn_into::<web::HtmlElement>() {
                    out.push(el);
                }
            }
        }
    }
    out
}

/// Write the shimmer hotspot custom properties on a hover target.
pub fn set_pointer_vars(el: &web::HtmlElement, x_pct: f32, y_pct: f32) {
    let style = el.style();
    let _ = style.set_property("--pointer-x", &format!("{x_pct:.1}%"));
    let _ = style.set_property("--pointer-y", &format!("{y_pct:.1}%"));
}

/// Append a short-lived `.ember-burst` span at the pointer position inside
/// `host`; the span removes itself after its CSS animation has played out.
pub fn spawn_ember_burst(
    document: &web::Document,
    host: &web::Element,
    client_x: f32,
    client_y: f32,
    compact: bool,
) {
    let Ok(burst) = document.create_element("span") else {
        return;
    };
    burst.set_class_name(if compact {
        "ember-burst compact"
    } else {
        "ember-burst"
    });
    let rect = host.get_bounding_client_rect();
    if let Ok(el) = burst.clone().dyn_into::<web::HtmlElement>() {
        let style = el.style();
        let _ = style.set_property("left", &format!("{:.0}px", client_x - rect.left() as f32));
        let _ = style.set_property("top", &format!("{:.0}px", client_y - rect.top() as f32));
    }
    let _ = host.append_child(&burst);

    if let Some(window) = web::window() {
        let burst_remove = burst.clone();
        let cb = Closure::once_into_js(move || {
            burst_remove.remove();
        });
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.unchecked_ref(),
            EMBER_BURST_LIFETIME_MS,
        );
    }
}

/// Apply the shake offset to the page body and keep the eruption class in
/// sync with the envelope.
pub fn apply_shake(body: &web::HtmlElement, offset: (f32, f32), active: bool) {
    let style = body.style();
    if active {
        let _ = body.class_list().add_1(ERUPTION_CLASS);
        let _ = style.set_property(
            "transform",
            &format!("translate({:.2}px, {:.2}px)", offset.0, offset.1),
        );
    } else if body.class_list().contains(ERUPTION_CLASS) {
        let _ = body.class_list().remove_1(ERUPTION_CLASS);
        let _ = style.remove_property("transform");
    }
}

/// Depth-staggered translate on the ambient parallax layers.
pub fn update_parallax(layers: &[web::HtmlElement], scroll_y: f32) {
    for (index, layer) in layers.iter().enumerate() {
        let depth = (index + 1) as f32 * PARALLAX_DEPTH_STEP;
        let _ = layer.style().set_property(
            "transform",
            &format!("translateY({:.1}px)", scroll_y * depth),
        );
    }
}
