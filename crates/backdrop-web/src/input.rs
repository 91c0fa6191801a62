use glam::Vec2;
use web_sys as web;

/// Normalized pointer position from client coordinates. The canvas is
/// fixed fullscreen, so client space and canvas space coincide; a
/// zero-sized canvas falls back to the center.
#[inline]
pub fn client_uv(client_x: f64, client_y: f64, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let w = canvas.width() as f32;
    let h = canvas.height() as f32;
    if w > 0.0 && h > 0.0 {
        Vec2::new(
            (client_x as f32 / w).clamp(0.0, 1.0),
            (client_y as f32 / h).clamp(0.0, 1.0),
        )
    } else {
        Vec2::new(0.5, 0.5)
    }
}
