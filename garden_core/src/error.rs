//! Error types for the garden_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for garden_core operations
///
/// The calculators themselves never fail; they decline to produce a result
/// instead. These variants cover the surrounding plumbing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An enumerated field received a value outside its option list
    #[error("Unknown {kind}: '{value}'")]
    UnknownOption { kind: &'static str, value: String },

    /// A calculator was invoked without its required fields
    #[error("Nothing to calculate for {calculator}: missing {fields}")]
    MissingInput {
        calculator: &'static str,
        fields: String,
    },

    /// Lookup table consistency error
    #[error("Table validation error: {0}")]
    TableValidation(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
