//! Flat TOML scene description.
//!
//! A scene lists sprites, tinted quads, hex tiles, bordered panels and raw
//! triangles. [`Scene::batches`] resolves it into the instance records each
//! shading program consumes.

mod batches;

#[cfg(test)]
mod tests;

pub use batches::*;

use std::path::{Path, PathBuf};

use blockshade_common::SceneError;
use serde::{Deserialize, Serialize};

/// Default sprite edge length in world units.
pub const DEFAULT_SPRITE_SIZE: f32 = 32.0;

/// Root scene document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    pub camera: Option<SceneCamera>,
    pub sprite: SpriteSettings,
    pub sprites: Vec<SpriteEntry>,
    pub quads: Vec<QuadEntry>,
    pub tiles: Vec<TileEntry>,
    pub panels: Vec<PanelEntry>,
    pub triangles: Vec<TriangleEntry>,
    /// Directory relative texture paths resolve against.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// World rectangle mapped onto the frame. Absent means pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneCamera {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSettings {
    /// PNG path; a checkerboard is generated when unset.
    pub texture: Option<PathBuf>,
    pub size: f32,
}

impl Default for SpriteSettings {
    fn default() -> Self {
        Self {
            texture: None,
            size: DEFAULT_SPRITE_SIZE,
        }
    }
}

/// Sprite centered on `offset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteEntry {
    pub offset: [f32; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadEntry {
    pub offset: [f32; 2],
    pub size: [f32; 2],
    pub color: String,
}

/// Hex tile whose top-left corner sits at `offset`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileEntry {
    pub offset: [f32; 2],
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelEntry {
    pub position: [f32; 2],
    pub size: [f32; 2],
    #[serde(default = "default_panel_fill")]
    pub fill: String,
    #[serde(default = "default_panel_border")]
    pub border: String,
    #[serde(default = "default_border_size")]
    pub border_size: f32,
}

fn default_panel_fill() -> String {
    "#00000000".into()
}

fn default_panel_border() -> String {
    "#ffffff".into()
}

fn default_border_size() -> f32 {
    1.0
}

/// Triangle list in clip space, three vertices per triangle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleEntry {
    pub vertices: Vec<TriangleVertex>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriangleVertex {
    pub position: [f32; 2],
    pub color: String,
}

impl Scene {
    pub fn from_toml_str(s: &str) -> Result<Self, SceneError> {
        toml::from_str(s).map_err(|e| SceneError::Parse(e.to_string()))
    }

    /// Read and parse a scene file. Relative texture paths resolve against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SceneError::Parse(format!("{}: {e}", path.display())))?;
        let mut scene = Self::from_toml_str(&content)?;
        scene.base_dir = path.parent().map(Path::to_path_buf);
        tracing::info!(
            path = %path.display(),
            sprites = scene.sprites.len(),
            quads = scene.quads.len(),
            tiles = scene.tiles.len(),
            panels = scene.panels.len(),
            triangles = scene.triangles.len(),
            "loaded scene"
        );
        Ok(scene)
    }

    pub(crate) fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }
}
