//! # Error Types
//!
//! This module defines error types used throughout the dotcal library.

use thiserror::Error;

/// Main error type for dotcal operations
#[derive(Debug, Error)]
pub enum DotcalError {
    /// Font loading or registration failure
    #[error("Font error: {0}")]
    Font(String),

    /// Image decoding, fetching or encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Network-level errors (binding, serving, HTTP client)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid command-line argument or parameter
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
