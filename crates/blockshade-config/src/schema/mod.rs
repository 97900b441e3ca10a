//! Configuration schema types for blockshade.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod render;
mod sampler;

pub use logging::*;
pub use render::*;
pub use sampler::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct BlockshadeConfig {
    pub render: RenderConfig,
    pub sampler: SamplerConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
