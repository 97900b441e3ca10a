//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod render;


use crate::schema::BlockshadeConfig;
use blockshade_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BlockshadeConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    render::validate_render(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
