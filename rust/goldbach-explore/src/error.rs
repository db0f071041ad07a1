//! Errors raised by the exploration driver.

use goldbach_core::PrimeError;

#[derive(Debug, thiserror::Error)]
pub enum ExploreError {
    #[error(transparent)]
    Prime(#[from] PrimeError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{name} has length {len}, at least {required} entries are needed")]
    ArrayTooShort {
        name: &'static str,
        len: usize,
        required: u64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
