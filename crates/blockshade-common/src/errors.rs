use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("scene parse error: {0}")]
    Parse(String),

    #[error("invalid color in {field}: {value}")]
    InvalidColor { field: String, value: String },

    #[error("texture error: {0}")]
    Texture(String),

    #[error("triangle list needs a multiple of 3 vertices, got {0}")]
    IncompleteTriangle(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum BlockshadeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("renderer error: {0}")]
    Renderer(String),

    #[error("image error: {0}")]
    Image(String),
}
