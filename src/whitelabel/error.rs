use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhitelabelError {
    #[error("Environment variables file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Mautic themes directory not found: {}", .0.display())]
    ThemesDirNotFound(PathBuf),

    #[error("Creating directory {} was not successful: {source}", path.display())]
    OverrideDirCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error copying template {}: {source}", from.display())]
    TemplateCopy {
        from: PathBuf,
        source: std::io::Error,
    },

    #[error("Error reading template {}: {source}", path.display())]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Error writing to the override template {}: {source}", path.display())]
    TemplateWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Dotenv error: {0}")]
    Dotenv(#[from] dotenvy::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Regex(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WhitelabelError>;
