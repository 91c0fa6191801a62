#![cfg(target_arch = "wasm32")]
use backdrop_core::SceneState;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod draw;
mod events;
mod frame;
mod input;
mod site;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("backdrop-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #backdrop-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    // Keep the backing store matched to the visual viewport
    dom::wire_canvas_resize(&canvas);

    let mut rng = StdRng::from_entropy();
    let scene = Rc::new(RefCell::new(SceneState::new(&mut rng)));

    events::wire_input_handlers(scene.clone(), &canvas);
    site::init(&document);

    // Render loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        ctx,
        rng,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
