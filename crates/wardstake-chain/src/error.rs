//! Error types for chain operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("signer bridge error: {0}")]
    Signer(String),

    #[error("invalid chain data: {0}")]
    InvalidData(String),
}
