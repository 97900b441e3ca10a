//! Headless wgpu host: runs the WGSL programs into an offscreen target.

mod camera;
mod context;
mod frame;
mod offscreen;
mod pipeline;
mod renderers;
mod texture;
mod types;

pub use camera::CameraBinding;
pub use context::GpuContext;
pub use frame::{render_scene_gpu, TARGET_FORMAT};
pub use offscreen::OffscreenTarget;
pub use pipeline::{create_program_pipeline, ProgramPipelineDesc};
pub use renderers::{
    BorderedRectRenderer, HexTileRenderer, SpriteRenderer, TintRenderer, TriangleRenderer,
};
pub use texture::GpuTexture;
pub use types::RendererError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_device_display() {
        let err = RendererError::DeviceError("out of memory".to_string());
        assert_eq!(err.to_string(), "device error: out of memory");
    }

    #[test]
    fn renderer_error_readback_display() {
        let err = RendererError::ReadbackError("map failed".to_string());
        assert_eq!(err.to_string(), "readback error: map failed");
    }

    #[test]
    fn renderer_error_instance_overflow_display() {
        let err = RendererError::InstanceOverflow {
            requested: 1 << 40,
            limit: 1 << 28,
        };
        assert_eq!(
            err.to_string(),
            "instance buffer of 1099511627776 bytes exceeds device limit of 268435456"
        );
    }
}
