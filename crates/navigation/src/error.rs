use std::path::PathBuf;

use shared::error::ParseError;
use thiserror::Error;

use crate::controller::ControllerId;

/// Lifecycle misuse. Navigation itself never fails: a refused transition is a
/// silent no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation controller {0} has not been started")]
    NotStarted(ControllerId),
    #[error("navigation controller {0} is stopped; acquire a live one from the host")]
    Stopped(ControllerId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read navigation config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse navigation config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("max_stack_depth must be a positive integer, got {0}")]
    InvalidMaxDepth(String),
    #[error(transparent)]
    UnknownTag(#[from] ParseError),
}
