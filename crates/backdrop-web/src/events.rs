use crate::dom;
use crate::input;
use backdrop_core::SceneState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Document-level pointer wiring. Mouse and touch both collapse into the
/// same normalized pointer state; a touch lift cycles the pattern.
pub fn wire_input_handlers(scene: Rc<RefCell<SceneState>>, canvas: &web::HtmlCanvasElement) {
    wire_mousemove(scene.clone(), canvas.clone());
    wire_touchmove(scene.clone(), canvas.clone());
    wire_touchend(scene);
}

fn wire_mousemove(scene: Rc<RefCell<SceneState>>, canvas: web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let uv = input::client_uv(ev.client_x() as f64, ev.client_y() as f64, &canvas);
        scene.borrow_mut().pointer_moved(uv);
    }) as Box<dyn FnMut(_)>);
    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(scene: Rc<RefCell<SceneState>>, canvas: web::HtmlCanvasElement) {
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            let uv = input::client_uv(touch.client_x() as f64, touch.client_y() as f64, &canvas);
            scene.borrow_mut().pointer_moved(uv);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchend(scene: Rc<RefCell<SceneState>>) {
    let closure = Closure::wrap(Box::new(move || {
        scene.borrow_mut().touch_ended();
    }) as Box<dyn FnMut()>);
    if let Some(doc) = dom::window_document() {
        _ = doc.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
