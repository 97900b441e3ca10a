use super::{GpuContext, RendererError};

/// Color target that can be copied back to host memory.
pub struct OffscreenTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    width: u32,
    height: u32,
}

/// Bytes per row of an RGBA8 copy, padded to wgpu's copy alignment.
pub(crate) fn padded_bytes_per_row(width: u32) -> u32 {
    let unpadded = width * 4;
    let align = wgpu::COPY_BYTES_PER_ROW_ALIGNMENT;
    unpadded.div_ceil(align) * align
}

/// Drop the row padding from a mapped copy.
pub(crate) fn unpad_rows(data: &[u8], width: u32, height: u32, padded_row: u32) -> Vec<u8> {
    let row = (width * 4) as usize;
    let mut pixels = Vec::with_capacity(row * height as usize);
    for y in 0..height as usize {
        let start = y * padded_row as usize;
        pixels.extend_from_slice(&data[start..start + row]);
    }
    pixels
}

impl OffscreenTarget {
    pub fn new(
        device: &wgpu::Device,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("offscreen target"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            width,
            height,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Copy the target into a mappable buffer and wait for it.
    pub fn read_back(&self, ctx: &GpuContext) -> Result<image::RgbaImage, RendererError> {
        let padded_row = padded_bytes_per_row(self.width);
        let buffer = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("offscreen readback"),
            size: u64::from(padded_row) * u64::from(self.height),
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("readback encoder"),
            });
        encoder.copy_texture_to_buffer(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::TexelCopyBufferInfo {
                buffer: &buffer,
                layout: wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(padded_row),
                    rows_per_image: Some(self.height),
                },
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
        ctx.queue.submit(std::iter::once(encoder.finish()));

        let slice = buffer.slice(..);
        let (tx, rx) = std::sync::mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        ctx.device.poll(wgpu::Maintain::Wait);
        rx.recv()
            .map_err(|e| RendererError::ReadbackError(e.to_string()))??;

        let data = slice.get_mapped_range();
        let pixels = unpad_rows(&data, self.width, self.height, padded_row);
        drop(data);
        buffer.unmap();

        tracing::debug!(width = self.width, height = self.height, "offscreen target read back");

        image::RgbaImage::from_raw(self.width, self.height, pixels).ok_or_else(|| {
            RendererError::ReadbackError("readback size does not match target".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_row_rounds_up_to_alignment() {
        assert_eq!(padded_bytes_per_row(1), 256);
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(640), 2560);
    }

    #[test]
    fn unpad_rows_drops_padding() {
        let padded = 8;
        let mut data = vec![0xAAu8; 8 * 2];
        data[0..4].copy_from_slice(&[1, 2, 3, 4]);
        data[8..12].copy_from_slice(&[5, 6, 7, 8]);
        assert_eq!(unpad_rows(&data, 1, 2, padded), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
