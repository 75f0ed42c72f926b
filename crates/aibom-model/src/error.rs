//! Error types for the document model

/// Errors decoding or encoding documents
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Document is not valid JSON or does not match the model
    #[error("invalid document json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
