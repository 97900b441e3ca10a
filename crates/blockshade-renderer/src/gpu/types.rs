/// Errors that can occur while rendering on the GPU.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("readback error: {0}")]
    ReadbackError(String),

    #[error("instance buffer of {requested} bytes exceeds device limit of {limit}")]
    InstanceOverflow { requested: u64, limit: u64 },
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

impl From<wgpu::BufferAsyncError> for RendererError {
    fn from(e: wgpu::BufferAsyncError) -> Self {
        RendererError::ReadbackError(e.to_string())
    }
}

impl From<RendererError> for blockshade_common::BlockshadeError {
    fn from(e: RendererError) -> Self {
        blockshade_common::BlockshadeError::Renderer(e.to_string())
    }
}
