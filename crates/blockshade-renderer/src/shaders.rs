//! WGSL sources, one per shading program. Each defines `vs_main` and
//! `fs_main`.

pub const SPRITE_SHADER: &str = include_str!("shaders/sprite.wgsl");
pub const TINT_SHADER: &str = include_str!("shaders/tint.wgsl");
pub const BORDERED_RECT_SHADER: &str = include_str!("shaders/bordered_rect.wgsl");
pub const HEX_TILE_SHADER: &str = include_str!("shaders/hex_tile.wgsl");
pub const TRIANGLE_SHADER: &str = include_str!("shaders/triangle.wgsl");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Sprite,
    Tint,
    BorderedRect,
    HexTile,
    Triangle,
}

impl ShaderKind {
    pub const ALL: [ShaderKind; 5] = [
        ShaderKind::Sprite,
        ShaderKind::Tint,
        ShaderKind::BorderedRect,
        ShaderKind::HexTile,
        ShaderKind::Triangle,
    ];

    /// File stem used when dumping sources.
    pub const fn name(self) -> &'static str {
        match self {
            ShaderKind::Sprite => "sprite",
            ShaderKind::Tint => "tint",
            ShaderKind::BorderedRect => "bordered_rect",
            ShaderKind::HexTile => "hex_tile",
            ShaderKind::Triangle => "triangle",
        }
    }

    pub const fn source(self) -> &'static str {
        match self {
            ShaderKind::Sprite => SPRITE_SHADER,
            ShaderKind::Tint => TINT_SHADER,
            ShaderKind::BorderedRect => BORDERED_RECT_SHADER,
            ShaderKind::HexTile => HEX_TILE_SHADER,
            ShaderKind::Triangle => TRIANGLE_SHADER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::HexRegion;
    use crate::program::TILE_SCALE;

    #[test]
    fn every_shader_parses_and_validates() {
        use naga::valid::{Capabilities, ValidationFlags, Validator};

        for kind in ShaderKind::ALL {
            let module = naga::front::wgsl::parse_str(kind.source()).unwrap_or_else(|e| {
                panic!("{}: {}", kind.name(), e.emit_to_string(kind.source()))
            });
            Validator::new(ValidationFlags::all(), Capabilities::default())
                .validate(&module)
                .unwrap_or_else(|e| panic!("{}: {e:?}", kind.name()));

            let stages: Vec<_> = module
                .entry_points
                .iter()
                .map(|ep| (ep.name.as_str(), ep.stage))
                .collect();
            assert!(stages.contains(&("vs_main", naga::ShaderStage::Vertex)));
            assert!(stages.contains(&("fs_main", naga::ShaderStage::Fragment)));
        }
    }

    #[test]
    fn every_shader_has_both_entry_points() {
        for kind in ShaderKind::ALL {
            let src = kind.source();
            assert!(src.contains("fn vs_main("), "{} lacks vs_main", kind.name());
            assert!(src.contains("fn fs_main("), "{} lacks fs_main", kind.name());
        }
    }

    #[test]
    fn camera_programs_bind_group_zero() {
        for kind in [
            ShaderKind::Sprite,
            ShaderKind::Tint,
            ShaderKind::BorderedRect,
            ShaderKind::HexTile,
        ] {
            assert!(kind.source().contains("@group(0) @binding(0)"));
        }
        assert!(!TRIANGLE_SHADER.contains("@group("));
        assert!(SPRITE_SHADER.contains("@group(1) @binding(1)"));
    }

    #[test]
    fn hex_shader_carries_cpu_constants() {
        assert!(HEX_TILE_SHADER.contains(&format!("TILE_SCALE: f32 = {TILE_SCALE:.1}")));
        for region in [
            HexRegion::Top,
            HexRegion::Bottom,
            HexRegion::Right,
            HexRegion::Left,
            HexRegion::Middle,
        ] {
            let needle = format!("return {:.1};", region.factor());
            assert!(HEX_TILE_SHADER.contains(&needle), "missing {needle}");
        }
        // Order matters: top is tested before left.
        let top = HEX_TILE_SHADER.find("return 1.2;").unwrap();
        let left = HEX_TILE_SHADER.find("return 0.8;").unwrap();
        assert!(top < left);
    }

    #[test]
    fn bordered_shader_discards_on_zero_alpha() {
        assert!(BORDERED_RECT_SHADER.contains("fill_color.a == 0.0"));
        assert!(BORDERED_RECT_SHADER.contains("discard;"));
        assert!(BORDERED_RECT_SHADER.contains("@builtin(vertex_index)"));
    }

    #[test]
    fn instance_colors_are_flat() {
        assert!(TINT_SHADER.contains("@interpolate(flat) color"));
        assert!(HEX_TILE_SHADER.contains("@interpolate(flat) color"));
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = ShaderKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }
}
