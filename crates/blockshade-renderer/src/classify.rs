//! Fragment classifiers: region tests on a fragment's local position.

use blockshade_common::Color;
use glam::Vec2;

// ---------------------------------------------------------------------------
// Border
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderRegion {
    Border,
    Fill,
}

/// Classify `local` within a rectangle of `size` with a border `border` wide.
///
/// Comparisons are strict on every edge, so a point exactly `border` away
/// from an edge is fill.
pub fn classify_border(local: Vec2, size: Vec2, border: f32) -> BorderRegion {
    let Vec2 { x, y } = local;
    if y < border || x < border || y > size.y - border || x > size.x - border {
        BorderRegion::Border
    } else {
        BorderRegion::Fill
    }
}

// ---------------------------------------------------------------------------
// Hex tile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexRegion {
    Top,
    Bottom,
    Right,
    Left,
    Middle,
}

impl HexRegion {
    /// Brightness multiplier applied to the tint's color channels.
    pub const fn factor(self) -> f32 {
        match self {
            HexRegion::Top => 1.2,
            HexRegion::Bottom => 0.6,
            HexRegion::Right => 0.9,
            HexRegion::Left => 0.8,
            HexRegion::Middle => 1.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HexRegion::Top => "top",
            HexRegion::Bottom => "bottom",
            HexRegion::Right => "right",
            HexRegion::Left => "left",
            HexRegion::Middle => "middle",
        }
    }
}

/// Region predicates in match order. The first hit wins; `Middle` is the
/// fallback and has no entry.
pub const HEX_REGIONS: [(HexRegion, fn(f32, f32) -> bool); 4] = [
    (HexRegion::Top, |x, y| y < 0.2 && x >= y && 1.0 - x >= y),
    (HexRegion::Bottom, |x, y| y > 0.8 && x < y && 1.0 - x < y),
    (HexRegion::Right, |x, y| x > 0.8 && y < x),
    (HexRegion::Left, |x, _| x < 0.2),
];

/// Classify a position on the unit tile.
pub fn classify_hex(local: Vec2) -> HexRegion {
    HEX_REGIONS
        .iter()
        .find(|(_, hit)| hit(local.x, local.y))
        .map(|(region, _)| *region)
        .unwrap_or(HexRegion::Middle)
}

/// Tint scaled by the region factor at `local`. Alpha passes through.
pub fn shade_hex(tint: Color, local: Vec2) -> Color {
    tint.scale_rgb(classify_hex(local).factor())
}

// =============================================================================
// Tests
// =============================================================================
