//! Subcommand handlers. Each returns its output as a `String` so `main`
//! decides where it goes.

mod classify;
mod config;
mod render;
mod shaders;

pub use classify::run as classify;
pub use config::run as config;
pub use render::run as render;
pub use shaders::run as shaders;
