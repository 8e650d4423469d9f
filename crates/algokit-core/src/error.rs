//! Error types for algokit
//!
//! Errors fall into three kinds:
//! - Input: the caller passed something the algorithm cannot accept
//!   (start node out of range, empty or negative Nim piles, ...)
//! - Config: a configuration file could not be read or is invalid
//! - Failure: anything else (I/O)

mod macros;

use thiserror::Error;

/// Broad classification of an [`AlgoError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid caller input
    Input,
    /// Invalid or unreadable configuration
    Config,
    /// Generic failure
    Failure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Input => "input",
            ErrorKind::Config => "config",
            ErrorKind::Failure => "failure",
        }
    }
}

/// Errors that can occur during algokit operations
#[derive(Error, Debug)]
pub enum AlgoError {
    // Input errors
    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("result buffer too small: need {needed} slots, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("the collection of piles cannot be empty")]
    EmptyPiles,

    #[error("pile {index} contains a negative number of stones: {value}")]
    NegativePile { index: usize, value: i64 },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Config errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // Generic failures
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl AlgoError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        AlgoError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a node id outside `[0, node_count)`
    pub fn out_of_range(node: usize, node_count: usize) -> Self {
        AlgoError::NodeOutOfRange { node, node_count }
    }

    /// Get the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AlgoError::NodeOutOfRange { .. }
            | AlgoError::BufferTooSmall { .. }
            | AlgoError::EmptyPiles
            | AlgoError::NegativePile { .. }
            | AlgoError::InvalidValue { .. } => ErrorKind::Input,

            AlgoError::Toml(_) | AlgoError::TomlSerialize(_) => ErrorKind::Config,

            AlgoError::Io(_) | AlgoError::Other(_) => ErrorKind::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            AlgoError::NodeOutOfRange { .. } => "node_out_of_range",
            AlgoError::BufferTooSmall { .. } => "buffer_too_small",
            AlgoError::EmptyPiles => "empty_piles",
            AlgoError::NegativePile { .. } => "negative_pile",
            AlgoError::InvalidValue { .. } => "invalid_value",
            AlgoError::Toml(_) => "toml_error",
            AlgoError::TomlSerialize(_) => "toml_serialize_error",
            AlgoError::Io(_) => "io_error",
            AlgoError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "kind": self.kind().as_str(),
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for algokit operations
pub type Result<T> = std::result::Result<T, AlgoError>;
