//! Frame and backend configuration types.

use serde::{Deserialize, Serialize};

/// Which rasterizer draws the frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Backend {
    /// CPU reference rasterizer; needs no GPU.
    #[default]
    Software,
    /// Headless wgpu device.
    Gpu,
}

/// Frame configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels (valid range: 1-8192).
    pub width: u32,
    /// Output height in pixels (valid range: 1-8192).
    pub height: u32,
    pub clear_color: String,
    pub backend: Backend,
    /// Per-batch instance buffer capacity (valid range: 1-1000000).
    pub max_instances: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            clear_color: "#050505".into(),
            backend: Backend::Software,
            max_instances: 4096,
        }
    }
}
