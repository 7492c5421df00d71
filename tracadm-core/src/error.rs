pub use anyhow::bail;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TracError {
    Config(String),
    Validation(String),
    Remote(String),
    Io(#[from] std::io::Error),
    Command(String),
    Dependency(String),
    Filesystem(String),
    Serialization(String),
    Cancelled(String),
    Other(#[from] anyhow::Error),
}

impl Display for TracError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TracError::Config(s) => write!(f, "Configuration error: {}", s),
            TracError::Validation(s) => write!(f, "Validation error: {}", s),
            TracError::Remote(s) => write!(f, "Remote error: {}", s),
            TracError::Io(e) => write!(f, "I/O error: {}", e),
            TracError::Command(s) => write!(f, "Command failed: {}", s),
            TracError::Dependency(s) => write!(f, "Dependency not found: {}", s),
            TracError::Filesystem(s) => write!(f, "Filesystem error: {}", s),
            TracError::Serialization(s) => write!(f, "Serialization error: {}", s),
            TracError::Cancelled(s) => write!(f, "Cancelled: {}", s),
            TracError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl From<serde_yaml_ng::Error> for TracError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        TracError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TracError>;
