use thiserror::Error;

/// Dockbridge error types
#[derive(Error, Debug)]
pub enum BridgeError {
    /// An engine record is structurally unusable for its declared shape
    #[error("Malformed {shape} record: {message}")]
    MalformedRecord {
        shape: &'static str,
        message: String,
    },

    /// A container name does not follow the orchestrator naming convention
    #[error("Name format error: {0}")]
    NameFormat(String),

    /// Raw engine JSON could not be deserialized into the record model
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for dockbridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
