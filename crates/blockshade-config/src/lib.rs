//! blockshade configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use colors::parse_color;
pub use schema::{BlockshadeConfig, CONFIG_SCHEMA_VERSION};

use blockshade_common::ConfigError;
use std::path::Path;

/// Load config from `path`, or from the platform default location.
///
/// The default location is created with a commented template when missing.
pub fn load_config(path: Option<&Path>) -> Result<BlockshadeConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BlockshadeConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

/// Serialize a config back to TOML.
pub fn config_to_toml(config: &BlockshadeConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config: {e}")))
}
