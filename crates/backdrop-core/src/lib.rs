pub mod color;
pub mod constants;
pub mod embeds;
pub mod fractal;
pub mod patterns;
pub mod pixel;
pub mod scene;
pub mod title;

pub use color::*;
pub use constants::*;
pub use embeds::*;
pub use fractal::*;
pub use patterns::*;
pub use pixel::*;
pub use scene::*;
pub use title::*;
