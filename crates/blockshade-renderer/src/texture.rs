//! CPU textures and the sampler the sprite program reads them through.
//!
//! Sampling follows wgpu conventions: texel `i` has its center at
//! `(i + 0.5) / size`, and addressing is applied per texel index.

use std::path::Path;

use blockshade_common::{Color, SceneError};
use blockshade_config::schema::{AddressMode, FilterMode, SamplerConfig};
use glam::Vec2;

// ---------------------------------------------------------------------------
// Texture2d
// ---------------------------------------------------------------------------

/// RGBA texture, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture2d {
    width: u32,
    height: u32,
    texels: Vec<Color>,
}

impl Texture2d {
    pub fn from_texels(width: u32, height: u32, texels: Vec<Color>) -> Result<Self, SceneError> {
        if width == 0 || height == 0 {
            return Err(SceneError::Texture(format!(
                "texture must not be empty, got {width}x{height}"
            )));
        }
        if texels.len() != (width as usize) * (height as usize) {
            return Err(SceneError::Texture(format!(
                "{width}x{height} texture needs {} texels, got {}",
                width as usize * height as usize,
                texels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    pub fn from_image(image: &image::RgbaImage) -> Result<Self, SceneError> {
        let texels = image
            .pixels()
            .map(|p| Color::from_rgba8(p[0], p[1], p[2], p[3]))
            .collect();
        Self::from_texels(image.width(), image.height(), texels)
    }

    /// Decode a PNG from disk.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let image = image::open(path)
            .map_err(|e| SceneError::Texture(format!("{}: {e}", path.display())))?;
        tracing::debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "loaded texture"
        );
        Self::from_image(&image.to_rgba8())
    }

    /// Square checkerboard of `size` texels with `cell`-wide squares.
    pub fn checkerboard(size: u32, cell: u32, a: Color, b: Color) -> Self {
        let size = size.max(1);
        let cell = cell.max(1);
        let texels = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .map(|(x, y)| if (x / cell + y / cell) % 2 == 0 { a } else { b })
            .collect();
        Self {
            width: size,
            height: size,
            texels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Texel at integer coordinates. Out-of-range coordinates clamp.
    pub fn texel(&self, x: u32, y: u32) -> Color {
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        self.texels[y * self.width as usize + x]
    }

    /// Texels packed as 8-bit RGBA, ready for a `Rgba8Unorm` upload.
    pub fn to_rgba8_bytes(&self) -> Vec<u8> {
        self.texels.iter().flat_map(|c| c.to_rgba8()).collect()
    }
}

// ---------------------------------------------------------------------------
// Sampler
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    pub address_mode: AddressMode,
    pub mag_filter: FilterMode,
    pub min_filter: FilterMode,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::from(&SamplerConfig::default())
    }
}

impl From<&SamplerConfig> for Sampler {
    fn from(config: &SamplerConfig) -> Self {
        Self {
            address_mode: config.address_mode,
            mag_filter: config.mag_filter,
            min_filter: config.min_filter,
        }
    }
}

impl Sampler {
    /// Filtered lookup at normalized coordinates `uv`.
    ///
    /// There are no mip levels, so the CPU path always magnifies and uses
    /// `mag_filter`.
    pub fn sample(&self, texture: &Texture2d, uv: Vec2) -> Color {
        let (w, h) = (texture.width as i64, texture.height as i64);
        match self.mag_filter {
            FilterMode::Nearest => {
                let x = self.address((uv.x * w as f32).floor() as i64, w);
                let y = self.address((uv.y * h as f32).floor() as i64, h);
                texture.texel(x, y)
            }
            FilterMode::Linear => {
                let fx = self.fold(uv.x * w as f32 - 0.5, w);
                let fy = self.fold(uv.y * h as f32 - 0.5, h);
                let (x0, y0) = (fx.floor(), fy.floor());
                let (tx, ty) = (fx - x0, fy - y0);
                let (x0, y0) = (x0 as i64, y0 as i64);

                let xa = self.address(x0, w);
                let xb = self.address(x0 + 1, w);
                let ya = self.address(y0, h);
                let yb = self.address(y0 + 1, h);

                let top = lerp_color(texture.texel(xa, ya), texture.texel(xb, ya), tx);
                let bottom = lerp_color(texture.texel(xa, yb), texture.texel(xb, yb), tx);
                lerp_color(top, bottom, ty)
            }
        }
    }

    /// Bring a texel-space coordinate into one period of the address mode
    /// so the integer neighbours below can't overflow.
    fn fold(&self, f: f32, n: i64) -> f32 {
        let n = n as f32;
        match self.address_mode {
            AddressMode::ClampToEdge => f.clamp(-1.0, n),
            AddressMode::Repeat => f.rem_euclid(n),
            AddressMode::MirrorRepeat => f.rem_euclid(2.0 * n),
        }
    }

    fn address(&self, i: i64, n: i64) -> u32 {
        let i = match self.address_mode {
            AddressMode::ClampToEdge => i.clamp(0, n - 1),
            AddressMode::Repeat => i.rem_euclid(n),
            AddressMode::MirrorRepeat => {
                let m = i.rem_euclid(2 * n);
                if m >= n {
                    2 * n - 1 - m
                } else {
                    m
                }
            }
        };
        i as u32
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color::new(
        a.r + (b.r - a.r) * t,
        a.g + (b.g - a.g) * t,
        a.b + (b.b - a.b) * t,
        a.a + (b.a - a.a) * t,
    )
}

// =============================================================================
// Tests
// =============================================================================
