use blockshade_common::Color;
use blockshade_config::{parse_color, BlockshadeConfig};

use super::{
    BorderedRectRenderer, CameraBinding, GpuContext, HexTileRenderer, OffscreenTarget,
    RendererError, SpriteRenderer, TintRenderer, TriangleRenderer,
};
use super::renderers::batch_capacity;
use crate::instance::BorderedInstance;
use crate::scene::{BatchKind, SceneBatches, DRAW_ORDER};
use crate::texture::Sampler;

/// Offscreen color format. Unorm so shader output is stored as written.
pub const TARGET_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Render resolved batches offscreen and read the frame back.
pub fn render_scene_gpu(
    ctx: &GpuContext,
    batches: &SceneBatches,
    config: &BlockshadeConfig,
) -> Result<image::RgbaImage, RendererError> {
    let render = &config.render;
    let max = render.max_instances;

    // Every instance buffer holds at most `max` records; panel records are
    // the largest.
    ctx.instance_buffer_size::<BorderedInstance>(max)?;

    let clear = parse_color(&render.clear_color).unwrap_or_else(|e| {
        tracing::warn!("bad clear color, using black: {e}");
        Color::BLACK
    });

    let target = OffscreenTarget::new(&ctx.device, render.width, render.height, TARGET_FORMAT);
    let camera = CameraBinding::new(&ctx.device, "scene");
    camera.update(&ctx.queue, &batches.camera_for(render.width, render.height));

    let mut triangles = TriangleRenderer::new(&ctx.device, TARGET_FORMAT);
    triangles.prepare(&ctx.device, &batches.triangles);

    let sprites = batches.sprites.as_ref().map(|batch| {
        let mut renderer = SpriteRenderer::new(
            &ctx.device,
            &ctx.queue,
            TARGET_FORMAT,
            &camera,
            &batch.texture,
            &Sampler::from(&config.sampler),
            batch.size,
            batch_capacity(batch.instances.len(), max),
        );
        renderer.prepare(&ctx.queue, &batch.instances);
        renderer
    });

    let mut quads = TintRenderer::new(&ctx.device, TARGET_FORMAT, &camera, max);
    quads.prepare(&ctx.device, &ctx.queue, &batches.quads);

    let mut tiles = HexTileRenderer::new(
        &ctx.device,
        TARGET_FORMAT,
        &camera,
        batch_capacity(batches.tiles.len(), max),
    );
    tiles.prepare(&ctx.queue, &batches.tiles);

    let mut panels = BorderedRectRenderer::new(
        &ctx.device,
        TARGET_FORMAT,
        &camera,
        batch_capacity(batches.panels.len(), max),
    );
    panels.prepare(&ctx.queue, &batches.panels);

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("scene encoder"),
        });
    {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.view(),
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: f64::from(clear.r),
                        g: f64::from(clear.g),
                        b: f64::from(clear.b),
                        a: f64::from(clear.a),
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        for kind in DRAW_ORDER {
            match kind {
                BatchKind::Triangles => triangles.render(&mut pass),
                BatchKind::Sprites => {
                    if let Some(sprites) = &sprites {
                        sprites.render(&mut pass, &camera);
                    }
                }
                BatchKind::Quads => quads.render(&mut pass, &camera),
                BatchKind::Tiles => tiles.render(&mut pass, &camera),
                BatchKind::Panels => panels.render(&mut pass, &camera),
            }
        }
    }
    ctx.queue.submit(std::iter::once(encoder.finish()));

    tracing::debug!(
        instances = batches.instance_count(),
        instance_bytes = batches.instance_bytes(),
        width = render.width,
        height = render.height,
        "gpu frame rendered"
    );

    target.read_back(ctx)
}
