//! Software rasterizer: runs the CPU reference programs into a framebuffer.

mod framebuffer;
mod raster;
mod render;

pub use framebuffer::Framebuffer;
pub use raster::{rasterize, DrawCall, DrawStats, SUBPIXEL_BITS};
pub use render::{render_scene, render_scene_with_stats};
