//! Frame configuration validation.

use crate::colors::validate_color;
use crate::schema::BlockshadeConfig;

use super::helpers::validate_range;

/// Maximum frame edge in pixels.
pub(crate) const MAX_FRAME_EDGE: u32 = 8192;

/// Validate frame size, instance capacity and clear color.
pub(crate) fn validate_render(errors: &mut Vec<String>, config: &BlockshadeConfig) {
    let render = &config.render;
    validate_range(errors, "render.width", render.width, 1, MAX_FRAME_EDGE);
    validate_range(errors, "render.height", render.height, 1, MAX_FRAME_EDGE);
    validate_range(
        errors,
        "render.max_instances",
        render.max_instances,
        1,
        1_000_000,
    );
    if !validate_color(&render.clear_color) {
        errors.push(format!(
            "render.clear_color = {:?} is not a valid color",
            render.clear_color
        ));
    }
}
