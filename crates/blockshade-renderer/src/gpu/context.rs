use super::RendererError;

/// Device and queue with no surface attached.
pub struct GpuContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub adapter_info: wgpu::AdapterInfo,
}

impl GpuContext {
    /// Create instance, adapter and device. Falls back to a software adapter
    /// when no hardware one is available.
    pub async fn headless() -> Result<Self, RendererError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                force_fallback_adapter: false,
                compatible_surface: None,
            })
            .await;

        let adapter = match adapter {
            Some(a) => a,
            None => {
                tracing::warn!("No hardware GPU adapter found, trying software fallback");
                instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        force_fallback_adapter: true,
                        compatible_surface: None,
                    })
                    .await
                    .ok_or(RendererError::AdapterNotFound)?
            }
        };

        let adapter_info = adapter.get_info();
        tracing::info!(
            "GPU adapter: {} ({:?}, {:?})",
            adapter_info.name,
            adapter_info.device_type,
            adapter_info.backend,
        );

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("blockshade device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_defaults(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        Ok(Self {
            device,
            queue,
            adapter_info,
        })
    }

    /// Blocking wrapper around [`GpuContext::headless`].
    pub fn headless_blocking() -> Result<Self, RendererError> {
        pollster::block_on(Self::headless())
    }

    /// Instance buffer size in bytes for `max_instances` records of `T`,
    /// checked against the device's buffer limit.
    pub fn instance_buffer_size<T>(&self, max_instances: u32) -> Result<u64, RendererError> {
        let requested = u64::from(max_instances.max(1)) * std::mem::size_of::<T>() as u64;
        let limit = self.device.limits().max_buffer_size;
        if requested > limit {
            return Err(RendererError::InstanceOverflow { requested, limit });
        }
        Ok(requested)
    }
}
