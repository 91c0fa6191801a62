use crate::draw;
use backdrop_core::{
    apply_glitch, mesh_segments, render_field, spinning_polygons, symmetry_segments,
    title_billboard, Pattern, PixelBuffer, SceneState, FLASH_ALPHA,
};
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<SceneState>>,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub rng: StdRng,
}

impl FrameContext {
    /// Render one frame: advance time, composite the fade trail, flash,
    /// dispatch the active pattern, maybe glitch, then check for
    /// auto-advance.
    pub fn frame(&mut self) {
        let size = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        let mut scene = self.scene.borrow_mut();
        scene.advance();

        draw::fill_surface(
            &self.ctx,
            size,
            &format!("rgba(0, 0, 0, {})", scene.fade_alpha()),
        );
        if scene.flash_active() {
            draw::fill_surface(&self.ctx, size, &format!("rgba(255, 255, 255, {FLASH_ALPHA})"));
        }

        match scene.pattern {
            Pattern::Polygons => draw_polygon_layer(&self.ctx, &mut scene, size, &mut self.rng),
            Pattern::Mesh => {
                draw::stroke_segments(&self.ctx, &mesh_segments(&scene, size, &mut self.rng));
            }
            Pattern::Fractal => {
                let mut buf = PixelBuffer::new(size.x as usize, size.y as usize);
                render_field(&scene, &mut buf);
                draw::blit(&self.ctx, &buf);
            }
            Pattern::Symmetry => {
                draw::stroke_segments(&self.ctx, &symmetry_segments(&scene, size));
            }
            Pattern::Overlay => {
                draw_polygon_layer(&self.ctx, &mut scene, size, &mut self.rng);
                draw::stroke_segments(&self.ctx, &mesh_segments(&scene, size, &mut self.rng));
            }
        }

        if scene.glitch_due(&mut self.rng) {
            apply_surface_glitch(&self.ctx, size, &mut self.rng);
        }

        scene.check_auto_advance();
    }
}

fn draw_polygon_layer(
    ctx: &web::CanvasRenderingContext2d,
    scene: &mut SceneState,
    size: Vec2,
    rng: &mut StdRng,
) {
    draw::stroke_polygons(ctx, &spinning_polygons(scene, size));
    if let Some(billboard) = title_billboard(scene, size, rng) {
        draw::fill_title(ctx, &billboard);
    }
}

/// Pull the surface pixels through the buffer-level glitch and write the
/// result back.
fn apply_surface_glitch(ctx: &web::CanvasRenderingContext2d, size: Vec2, rng: &mut StdRng) {
    let (w, h) = (size.x as u32, size.y as u32);
    if w == 0 || h == 0 {
        return;
    }
    let image = match ctx.get_image_data(0.0, 0.0, w as f64, h as f64) {
        Ok(image) => image,
        Err(e) => {
            log::error!("[frame] get_image_data: {:?}", e);
            return;
        }
    };
    let Some(mut buf) = PixelBuffer::from_rgba(w as usize, h as usize, image.data().0) else {
        return;
    };
    apply_glitch(&mut buf, rng);
    draw::blit(ctx, &buf);
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
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
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
