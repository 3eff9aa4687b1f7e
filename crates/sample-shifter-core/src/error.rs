use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Category configuration error: {0}")]
    Categories(#[from] ConfigError),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Preview file error: {0}")]
    Preview(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Failures while loading or validating a category configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("configuration must contain at least one category")]
    NoCategories,

    #[error("category name cannot be empty")]
    EmptyName,

    #[error("duplicate category name: {0}")]
    DuplicateName(String),

    #[error("category {0} must have at least one keyword")]
    NoKeywords(String),
}

/// A single failed copy. Recorded per file, never fatal for the batch.
#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to open source file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to create destination file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to copy into {}: {source}", path.display())]
    Copy {
        path: PathBuf,
        source: std::io::Error,
    },
}
