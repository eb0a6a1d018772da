use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),
    #[error("Unknown filter kind: {0}")]
    UnknownFilterKind(String),
    #[error("Unknown chart point kind: {0}")]
    UnknownPointKind(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}
