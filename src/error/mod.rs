use serde_json::Error as SerdeJsonError;
use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] SerdeJsonError),

    #[error("Manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("No route matches path: {0}")]
    RouteNotFound(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] IoError),

    #[error("Failed to parse config: {0}")]
    ParseFailed(String),

    #[error("Configuration directory not found")]
    NoConfigDir,
}

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unrecognized date-time: {0}")]
    InvalidDate(String),
}
