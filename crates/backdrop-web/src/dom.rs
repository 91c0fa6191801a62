use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Size the canvas backing store to the full visual viewport. The visual
/// viewport height differs from the window height on mobile while browser
/// chrome is collapsing.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = match w.visual_viewport() {
            Some(vv) => vv.height(),
            None => w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
        };
        canvas.set_width(width.max(0.0) as u32);
        canvas.set_height(height.max(0.0).floor() as u32);
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        if let Some(vv) = window.visual_viewport() {
            _ = vv.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            _ = vv.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}
