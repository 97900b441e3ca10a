//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, and `rgba(r,g,b,a)` formats.
//! In the `rgba()` format, the alpha component can be either 0-255 (integer)
//! or 0.0-1.0 (float), matching CSS conventions.

mod parse;


use blockshade_common::{Color, ConfigError};

use parse::{parse_hex, parse_rgba, HEX_RE, RGBA_RE};

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RGB` (e.g. `#f00`)
/// - `#RRGGBB` (e.g. `#00d4ff`)
/// - `#RRGGBBAA` (e.g. `#00d4ff80`)
/// - `rgba(r,g,b,a)` where `a` is 0.0-1.0 or 0-255 (e.g. `rgba(0,212,255,0.12)`)
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        return parse_hex(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return parse_rgba(s)
            .ok_or_else(|| ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s) && parse_rgba(s).is_some();
    }
    false
}
