//! Error types for arrangement operations.
//!
//! This module provides the main error type [`ArrangeError`] which covers
//! the conditions under which an arrangement is refused.

use std::io;

use thiserror::Error;

/// The main error type for arrangement operations.
///
/// Neither selection nor configuration errors leave partial results behind:
/// positions are only written once the whole layout has been computed.
#[derive(Debug, Error)]
pub enum ArrangeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The item list is empty or no usable active item was designated.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ArrangeError {
    /// Create a new `InvalidSelection` error.
    pub fn invalid_selection(msg: impl Into<String>) -> Self {
        Self::InvalidSelection(msg.into())
    }

    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
