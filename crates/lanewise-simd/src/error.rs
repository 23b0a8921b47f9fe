//! Error types for lanewise-simd.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid algorithm: {0}")]
    UnsupportedMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
