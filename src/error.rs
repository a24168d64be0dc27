//! Error types for the transient response engine.
//!
//! This module provides a unified error type [`TransientError`] that covers
//! all error conditions that can occur while validating user input, building
//! a circuit model, persisting parameters and writing results.

use thiserror::Error;

use crate::components::ComponentKind;

/// Result type alias using [`TransientError`].
pub type Result<T> = std::result::Result<T, TransientError>;

/// Unified error type for all engine operations.
#[derive(Error, Debug)]
pub enum TransientError {
    // ============ Component Errors ============
    /// Component magnitude is zero, negative or not finite
    #[error("The value of the {kind} must be greater than zero (got {value})")]
    InvalidValue { kind: ComponentKind, value: f64 },

    /// Unit does not match the component kind
    #[error("Invalid unit '{unit}' for {kind}: expected '{}'", .kind.unit().symbol())]
    InvalidUnit { kind: ComponentKind, unit: String },

    // ============ Input Errors ============
    /// User input could not be read as a number
    #[error("Invalid value for {field}: '{value}'")]
    ParameterParse { field: String, value: String },

    /// A field required by the selected topology was not supplied
    #[error("Missing required parameter '{field}'")]
    MissingParameter { field: String },

    /// Unknown topology name
    #[error("Unknown circuit topology '{name}' (expected RC, RL or RLC)")]
    UnknownTopology { name: String },

    /// Unknown configuration name
    #[error("Unknown configuration '{name}' (expected series or parallel)")]
    UnknownConfiguration { name: String },

    // ============ Model Errors ============
    /// Time grid cannot be used for evaluation
    #[error("Invalid time grid: {message}")]
    InvalidTimeGrid { message: String },

    /// Elements do not match the topology
    #[error("Invalid circuit topology: {message}")]
    InvalidTopology { message: String },

    // ============ I/O Errors ============
    /// Circuit diagram image not found
    #[error("Circuit diagram not found: '{path}'")]
    MissingAsset { path: String },

    /// Error reading a parameter file
    #[error("Failed to read parameter file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a parameter file
    #[error("Failed to write parameter file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Parameter file is not a flat JSON object of numbers
    #[error("Malformed parameter file '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Error writing waveform output
    #[error("Output error: {0}")]
    OutputError(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    SerializeError(#[from] serde_json::Error),
}

impl TransientError {
    /// Create an invalid value error
    pub fn invalid_value(kind: ComponentKind, value: f64) -> Self {
        Self::InvalidValue { kind, value }
    }

    /// Create an invalid unit error
    pub fn invalid_unit(kind: ComponentKind, unit: impl Into<String>) -> Self {
        Self::InvalidUnit {
            kind,
            unit: unit.into(),
        }
    }

    /// Create a parameter parse error
    pub fn parameter_parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::ParameterParse {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create an invalid time grid error
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        Self::InvalidTimeGrid {
            message: message.into(),
        }
    }

    /// Create an invalid topology error
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Whether the error was caused by user-supplied values rather than I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidValue { .. }
                | Self::InvalidUnit { .. }
                | Self::ParameterParse { .. }
                | Self::MissingParameter { .. }
        )
    }
}
