//! Scene resolution: colors parsed, entries packed into instance records.

use blockshade_common::{Color, SceneError};
use blockshade_config::parse_color;

use super::Scene;
use crate::camera::CameraUniform;
use crate::instance::{
    BorderedInstance, ColoredVertex, InstanceDescriptor, OffsetInstance, TintedInstance,
};
use crate::texture::Texture2d;

/// Batch kinds, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchKind {
    Triangles,
    Sprites,
    Quads,
    Tiles,
    Panels,
}

pub const DRAW_ORDER: [BatchKind; 5] = [
    BatchKind::Triangles,
    BatchKind::Sprites,
    BatchKind::Quads,
    BatchKind::Tiles,
    BatchKind::Panels,
];

#[derive(Debug, Clone)]
pub struct SpriteBatch {
    pub texture: Texture2d,
    pub size: f32,
    pub instances: Vec<OffsetInstance>,
}

/// Quads sharing one vertex buffer, so one size.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadBatch {
    pub size: [f32; 2],
    pub instances: Vec<TintedInstance>,
}

/// A scene resolved into per-program instance data.
#[derive(Debug, Clone, Default)]
pub struct SceneBatches {
    pub camera: Option<CameraUniform>,
    pub sprites: Option<SpriteBatch>,
    pub quads: Vec<QuadBatch>,
    pub tiles: Vec<TintedInstance>,
    pub panels: Vec<BorderedInstance>,
    pub triangles: Vec<ColoredVertex>,
}

impl SceneBatches {
    /// Scene camera, or a pixel-space camera for the given frame.
    pub fn camera_for(&self, width: u32, height: u32) -> CameraUniform {
        self.camera
            .unwrap_or_else(|| CameraUniform::orthographic(width as f32, height as f32))
    }

    /// Every instanced record, tagged, in draw order. Raw triangles are not
    /// instanced and are not included.
    pub fn instances(&self) -> impl Iterator<Item = (BatchKind, InstanceDescriptor)> + '_ {
        let sprites = self.sprites.iter().flat_map(|batch| {
            batch
                .instances
                .iter()
                .map(|&i| (BatchKind::Sprites, InstanceDescriptor::from(i)))
        });
        let quads = self.quads.iter().flat_map(|batch| {
            batch
                .instances
                .iter()
                .map(|&i| (BatchKind::Quads, InstanceDescriptor::from(i)))
        });
        let tiles = self
            .tiles
            .iter()
            .map(|&i| (BatchKind::Tiles, InstanceDescriptor::from(i)));
        let panels = self
            .panels
            .iter()
            .map(|&i| (BatchKind::Panels, InstanceDescriptor::from(i)));
        sprites.chain(quads).chain(tiles).chain(panels)
    }

    /// Bytes the instanced batches occupy once uploaded.
    pub fn instance_bytes(&self) -> usize {
        self.instances().map(|(_, desc)| desc.as_bytes().len()).sum()
    }

    /// Instances plus raw triangles.
    pub fn instance_count(&self) -> usize {
        self.instances().count() + self.triangles.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.instance_count() == 0
    }
}

fn color(field: impl FnOnce() -> String, value: &str) -> Result<Color, SceneError> {
    parse_color(value).map_err(|_| SceneError::InvalidColor {
        field: field(),
        value: value.to_string(),
    })
}

impl Scene {
    /// Resolve colors and textures into instance batches.
    ///
    /// The sprite texture is only loaded when the scene has sprites.
    pub fn batches(&self) -> Result<SceneBatches, SceneError> {
        let camera = self
            .camera
            .map(|c| CameraUniform::ortho_bounds(c.left, c.right, c.bottom, c.top));

        let sprites = if self.sprites.is_empty() {
            None
        } else {
            let texture = match &self.sprite.texture {
                Some(path) => Texture2d::load(&self.resolve_path(path))?,
                None => Texture2d::checkerboard(8, 4, Color::WHITE, Color::rgb(0.25, 0.25, 0.3)),
            };
            Some(SpriteBatch {
                texture,
                size: self.sprite.size,
                instances: self
                    .sprites
                    .iter()
                    .map(|s| OffsetInstance { offset: s.offset })
                    .collect(),
            })
        };

        // Quads of equal size share a batch, in first-seen order.
        let mut quads: Vec<QuadBatch> = Vec::new();
        for (i, quad) in self.quads.iter().enumerate() {
            let instance = TintedInstance {
                offset: quad.offset,
                color: color(|| format!("quads[{i}].color"), &quad.color)?,
            };
            match quads.iter_mut().find(|b| b.size == quad.size) {
                Some(batch) => batch.instances.push(instance),
                None => quads.push(QuadBatch {
                    size: quad.size,
                    instances: vec![instance],
                }),
            }
        }

        let tiles = self
            .tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| {
                Ok(TintedInstance {
                    offset: tile.offset,
                    color: color(|| format!("tiles[{i}].color"), &tile.color)?,
                })
            })
            .collect::<Result<Vec<_>, SceneError>>()?;

        let panels = self
            .panels
            .iter()
            .enumerate()
            .map(|(i, panel)| {
                Ok(BorderedInstance {
                    position: panel.position,
                    size: panel.size,
                    fill_color: color(|| format!("panels[{i}].fill"), &panel.fill)?,
                    border_size: panel.border_size,
                    border_color: color(|| format!("panels[{i}].border"), &panel.border)?,
                })
            })
            .collect::<Result<Vec<_>, SceneError>>()?;

        let mut triangles = Vec::new();
        for (i, entry) in self.triangles.iter().enumerate() {
            if entry.vertices.len() % 3 != 0 {
                return Err(SceneError::IncompleteTriangle(entry.vertices.len()));
            }
            for (j, vertex) in entry.vertices.iter().enumerate() {
                let c = color(
                    || format!("triangles[{i}].vertices[{j}].color"),
                    &vertex.color,
                )?;
                triangles.push(ColoredVertex {
                    position: vertex.position,
                    color: [c.r, c.g, c.b],
                });
            }
        }

        Ok(SceneBatches {
            camera,
            sprites,
            quads,
            tiles,
            panels,
            triangles,
        })
    }
}
