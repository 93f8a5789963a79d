use web_sys as web;

/// Pointer position normalized to \[-1, 1\] over the whole window, matching
/// the camera-target mapping in the core.
#[inline]
pub fn pointer_window_norm(ev: &web::PointerEvent, window: &web::Window) -> [f32; 2] {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0)
        .max(1.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0)
        .max(1.0) as f32;
    let nx = (ev.client_x() as f32 / w) * 2.0 - 1.0;
    let ny = (ev.client_y() as f32 / h) * 2.0 - 1.0;
    [nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0)]
}

/// Pointer position as a percentage of an element's box, for the CSS
/// shimmer variables.
#[inline]
pub fn pointer_element_pct(client_x: f32, client_y: f32, rect: &web::DomRect) -> (f32, f32) {
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let x = ((client_x - rect.left() as f32) / w * 100.0).clamp(0.0, 100.0);
    let y = ((client_y - rect.top() as f32) / h * 100.0).clamp(0.0, 100.0);
    (x, y)
}
