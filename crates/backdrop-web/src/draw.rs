//! Strokes backdrop-core primitives onto the 2D context.

use backdrop_core::{PixelBuffer, Polygon, Segment, TitleBillboard};
use glam::Vec2;
use wasm_bindgen::Clamped;
use web_sys as web;

pub fn fill_surface(ctx: &web::CanvasRenderingContext2d, size: Vec2, style: &str) {
    ctx.set_fill_style_str(style);
    ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
}

pub fn stroke_polygons(ctx: &web::CanvasRenderingContext2d, polygons: &[Polygon]) {
    for poly in polygons {
        let mut points = poly.points.iter();
        let Some(first) = points.next() else {
            continue;
        };
        ctx.begin_path();
        ctx.move_to(first.x as f64, first.y as f64);
        for p in points {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.close_path();
        ctx.set_stroke_style_str(poly.stroke.color);
        ctx.set_line_width(poly.stroke.width as f64);
        ctx.stroke();
    }
}

pub fn stroke_segments(ctx: &web::CanvasRenderingContext2d, segments: &[Segment]) {
    for seg in segments {
        ctx.begin_path();
        ctx.move_to(seg.a.x as f64, seg.a.y as f64);
        ctx.line_to(seg.b.x as f64, seg.b.y as f64);
        ctx.set_stroke_style_str(seg.stroke.color);
        ctx.set_line_width(seg.stroke.width as f64);
        ctx.stroke();
    }
}

pub fn fill_title(ctx: &web::CanvasRenderingContext2d, billboard: &TitleBillboard) {
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_font(&format!("600 {}px monospace", billboard.font_px));
    ctx.set_fill_style_str(billboard.color);
    ctx.set_global_alpha(billboard.alpha as f64);
    _ = ctx.fill_text(
        billboard.text,
        billboard.center.x as f64,
        billboard.center.y as f64,
    );
    ctx.set_global_alpha(1.0);
}

/// Replace the whole surface with the buffer's pixels.
pub fn blit(ctx: &web::CanvasRenderingContext2d, buf: &PixelBuffer) {
    if buf.width() == 0 || buf.height() == 0 {
        return;
    }
    match web::ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(buf.data()),
        buf.width() as u32,
        buf.height() as u32,
    ) {
        Ok(image) => {
            _ = ctx.put_image_data(&image, 0.0, 0.0);
        }
        Err(e) => log::error!("[draw] image data: {:?}", e),
    }
}
