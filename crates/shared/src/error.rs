use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown process '{0}' (expected one of: staging, topology)")]
    UnknownProcess(String),
    #[error("unknown blade type '{0}'")]
    UnknownBladeType(String),
}
