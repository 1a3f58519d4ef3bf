//! Errors surfaced by a mask operation.
//!
//! Traversal itself cannot fail: every node of a decoded tree is already one of
//! the JSON variants. Errors only come from the document boundary (decoding the
//! input, encoding the output) and from loading a declarative configuration.

use thiserror::Error;

/// Failure of a mask operation.
///
/// No variant ever carries a partially masked document: when an operation
/// fails, nothing derived from the input is returned.
#[derive(Debug, Error)]
pub enum MaskError {
    /// The input text is not a valid JSON document.
    #[error("failed to decode input document: {0}")]
    Decode(#[source] serde_json::Error),

    /// The masked tree could not be encoded. Indicates a bug.
    #[error("failed to encode masked document: {0}")]
    Encode(#[source] serde_json::Error),

    /// A declarative masker configuration could not be parsed.
    #[error("invalid masker configuration: {0}")]
    Config(#[source] serde_json::Error),
}

impl MaskError {
    /// Returns `true` when the input document was rejected.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = MaskError> = std::result::Result<T, E>;
