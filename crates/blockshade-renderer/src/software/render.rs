use blockshade_common::Color;
use blockshade_config::{parse_color, BlockshadeConfig};

use super::{rasterize, DrawCall, DrawStats, Framebuffer};
use crate::expand::RECT_VERTEX_COUNT;
use crate::instance::{cap_instances, PositionVertex, TexturedVertex, RECT_INDICES};
use crate::program::{
    BorderedRectProgram, HexTileProgram, SpriteProgram, TintProgram, TriangleProgram,
    HEX_TILE_VERTICES,
};
use crate::scene::{BatchKind, SceneBatches, DRAW_ORDER};
use crate::texture::Sampler;

/// Draw every batch in scene order into a fresh frame.
pub fn render_scene(batches: &SceneBatches, config: &BlockshadeConfig) -> Framebuffer {
    render_scene_with_stats(batches, config).0
}

pub fn render_scene_with_stats(
    batches: &SceneBatches,
    config: &BlockshadeConfig,
) -> (Framebuffer, DrawStats) {
    let render = &config.render;
    let clear = parse_color(&render.clear_color).unwrap_or_else(|e| {
        tracing::warn!("bad clear color, using black: {e}");
        Color::BLACK
    });
    let mut fb = Framebuffer::new(render.width, render.height, clear);
    let camera = batches.camera_for(render.width, render.height);
    let max = render.max_instances as usize;

    let mut stats = DrawStats::default();
    for kind in DRAW_ORDER {
        match kind {
            BatchKind::Triangles => {
                stats += rasterize(
                    &mut fb,
                    &TriangleProgram,
                    &camera,
                    &DrawCall {
                        vertices: &batches.triangles,
                        indices: None,
                        instances: &[()],
                    },
                );
            }
            BatchKind::Sprites => {
                let Some(batch) = &batches.sprites else {
                    continue;
                };
                let program = SpriteProgram {
                    texture: batch.texture.clone(),
                    sampler: Sampler::from(&config.sampler),
                };
                let vertices = TexturedVertex::centered_quad(batch.size);
                stats += rasterize(
                    &mut fb,
                    &program,
                    &camera,
                    &DrawCall {
                        vertices: &vertices,
                        indices: Some(&RECT_INDICES[..]),
                        instances: cap_instances(&batch.instances, max, "sprites"),
                    },
                );
            }
            BatchKind::Quads => {
                for batch in &batches.quads {
                    let vertices = PositionVertex::rect(batch.size[0], batch.size[1]);
                    stats += rasterize(
                        &mut fb,
                        &TintProgram,
                        &camera,
                        &DrawCall {
                            vertices: &vertices,
                            indices: Some(&RECT_INDICES[..]),
                            instances: cap_instances(&batch.instances, max, "quads"),
                        },
                    );
                }
            }
            BatchKind::Tiles => {
                stats += rasterize(
                    &mut fb,
                    &HexTileProgram,
                    &camera,
                    &DrawCall {
                        vertices: &HEX_TILE_VERTICES,
                        indices: None,
                        instances: cap_instances(&batches.tiles, max, "tiles"),
                    },
                );
            }
            BatchKind::Panels => {
                stats += rasterize(
                    &mut fb,
                    &BorderedRectProgram,
                    &camera,
                    &DrawCall {
                        vertices: &[(); RECT_VERTEX_COUNT as usize],
                        indices: None,
                        instances: cap_instances(&batches.panels, max, "panels"),
                    },
                );
            }
        }
    }

    tracing::debug!(
        triangles = stats.triangles,
        written = stats.fragments_written,
        discarded = stats.fragments_discarded,
        "software frame rendered"
    );
    (fb, stats)
}
