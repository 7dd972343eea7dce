use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid weight {weight} for entry '{identity}': weights must be non-negative")]
    InvalidWeight { identity: String, weight: i64 },

    #[error("Total weight overflowed at entry '{identity}'")]
    WeightOverflow { identity: String },
}
