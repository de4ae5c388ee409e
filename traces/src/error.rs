//! Errors raised while decoding deployment trace responses.

/// Error returned by [`crate::decode_list_response`].
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// The body was not a valid deployment trace response.
    #[error("failed to decode deployment traces: {0}")]
    Decode(#[from] serde_json::Error),
    /// The body was empty or only whitespace.
    #[error("empty deployment trace response")]
    EmptyBody,
}
