use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubtransError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid translation direction '{0}': use the form \"from:to\", e.g. \"en:fr\"")]
    InvalidLanguagePair(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Failed to back up {} to {}: {source}", .original.display(), .backup.display())]
    Backup {
        original: PathBuf,
        backup: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {} (original kept at {}): {source}", .path.display(), .backup.display())]
    Write {
        path: PathBuf,
        backup: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SubtransError>;
