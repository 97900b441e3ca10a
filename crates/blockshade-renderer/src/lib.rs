pub mod camera;
pub mod classify;
pub mod expand;
pub mod gpu;
pub mod instance;
pub mod program;
pub mod scene;
pub mod shaders;
pub mod software;
pub mod texture;

pub use camera::CameraUniform;
pub use classify::{classify_border, classify_hex, BorderRegion, HexRegion};
pub use gpu::{render_scene_gpu, GpuContext, RendererError};
pub use program::{Fragment, ShadingProgram, Varying, VertexOutput};
pub use scene::{Scene, SceneBatches};
pub use shaders::ShaderKind;
pub use software::{render_scene, render_scene_with_stats, DrawStats, Framebuffer};
pub use texture::{Sampler, Texture2d};
