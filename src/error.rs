//! Error types for map loading and grid queries.

use thiserror::Error;

/// Errors from grid queries whose preconditions the caller violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

/// Errors from decoding a map image file.
#[derive(Debug, Error)]
pub enum MapLoadError {
    #[error("failed to read map image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode map image: {0}")]
    Image(#[from] image::ImageError),
}
