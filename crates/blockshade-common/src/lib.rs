pub mod errors;
pub mod types;

pub use errors::{BlockshadeError, ConfigError, SceneError};
pub use types::Color;

pub type Result<T> = std::result::Result<T, BlockshadeError>;
