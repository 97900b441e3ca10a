//! Internal color parsing helpers.
//!
//! Handles the low-level conversion of hex and rgba string formats
//! into [`Color`] values. Not part of the public API.

use blockshade_common::Color;
use regex::Regex;
use std::sync::LazyLock;

/// Regex for hex color: #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// Regex for rgba() color with float or int alpha.
pub(crate) static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*([0-9]*\.?[0-9]+)\s*\)$",
    )
    .unwrap()
});

/// Parse a hex color string (#RGB, #RRGGBB, or #RRGGBBAA).
pub(super) fn parse_hex(s: &str) -> Option<Color> {
    if !HEX_RE.is_match(s) {
        return None;
    }
    let hex = s.strip_prefix('#')?;
    match hex.len() {
        3 => {
            // Expand #RGB to #RRGGBB
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
            Some(Color::from_rgba8(
                digit(0)? * 17,
                digit(1)? * 17,
                digit(2)? * 17,
                255,
            ))
        }
        _ => Color::from_hex(s),
    }
}

/// Parse an `rgba(r,g,b,a)` color string.
///
/// A float alpha (`0.5`) is 0.0-1.0 and kept unquantized. An integer alpha
/// is 0-255.
pub(super) fn parse_rgba(s: &str) -> Option<Color> {
    let caps = RGBA_RE.captures(s)?;
    let r: u8 = caps[1].parse().ok()?;
    let g: u8 = caps[2].parse().ok()?;
    let b: u8 = caps[3].parse().ok()?;
    let a_str = &caps[4];

    let a: f32 = if a_str.contains('.') {
        let a_float: f32 = a_str.parse().ok()?;
        if !(0.0..=1.0).contains(&a_float) {
            return None;
        }
        a_float
    } else {
        let a_int: u32 = a_str.parse().ok()?;
        if a_int > 255 {
            return None;
        }
        a_int as f32 / 255.0
    };

    let rgb = Color::from_rgba8(r, g, b, 255);
    Some(Color { a, ..rgb })
}
