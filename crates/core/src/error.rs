use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
}
