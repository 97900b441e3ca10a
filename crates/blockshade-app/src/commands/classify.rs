use blockshade_renderer::{classify_border, classify_hex, BorderRegion};
use glam::Vec2;

use crate::cli::ClassifyTarget;

pub fn run(target: &ClassifyTarget) -> String {
    match target {
        ClassifyTarget::Hex { x, y } => {
            let region = classify_hex(Vec2::new(*x, *y));
            format!("{} (factor {})", region.name(), region.factor())
        }
        ClassifyTarget::Border { x, y, size, border } => {
            let size = Vec2::new(
                size.first().copied().unwrap_or(0.0),
                size.get(1).copied().unwrap_or(0.0),
            );
            match classify_border(Vec2::new(*x, *y), size, *border) {
                BorderRegion::Border => "border".to_string(),
                BorderRegion::Fill => "fill".to_string(),
            }
        }
    }
}
