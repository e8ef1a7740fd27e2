//! Error types for the Mockaroo client.

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client was constructed without a usable API key. Raised
    /// before any network activity.
    #[error("API key required: {0}")]
    Configuration(String),

    /// The generation endpoint answered with a non-success status. The
    /// message is the response body, verbatim.
    #[error("{0}")]
    RemoteGeneration(String),

    /// A success response body could not be parsed into the requested
    /// record shape.
    #[error("failed to decode generated records: {0}")]
    Decoding(#[from] serde_json::Error),

    /// The transport failed before a response was received. Propagated
    /// as-is, with no classification or retry.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
