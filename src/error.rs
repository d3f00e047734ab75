use std::path::PathBuf;

use thiserror::Error;

pub use anyhow::Context;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error(transparent)]
    Steam(#[from] steamlocate::Error),
    #[error("preset store not found at {}", .0.display())]
    StoreNotFound(PathBuf),
    #[error("failed to parse {what}: {reason}")]
    Parse { what: String, reason: String },
    #[error("workshop item {0} was not found")]
    NotFound(String),
    #[error("workshop item {0} is not a collection")]
    NotACollection(String),
    #[error("workshop item {id} belongs to app {actual}, expected app {expected}")]
    WrongTarget { id: String, expected: u32, actual: u32 },
    #[error("{0}")]
    Validation(String),
    #[error("Garry's Mod installation not found: {0}")]
    InstallNotFound(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("operation cancelled by user")]
    Cancelled,
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn message<T: Into<String>>(msg: T) -> Self {
        AppError::Message(msg.into())
    }

    pub fn parse<W: Into<String>, R: ToString>(what: W, reason: R) -> Self {
        AppError::Parse {
            what: what.into(),
            reason: reason.to_string(),
        }
    }

    /// Process exit status reported by the binary for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Cancelled => 0,
            AppError::StoreNotFound(_) => 2,
            _ => 1,
        }
    }
}
