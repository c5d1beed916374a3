use thiserror::Error;

/// Errors from persisting launcher documents (settings, overrides,
/// keyboard map).
///
/// Load paths deliberately do not use this type — a missing or corrupt
/// document degrades to defaults with a logged warning. Only explicit save
/// operations report failure to the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error while writing the document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be serialized
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
