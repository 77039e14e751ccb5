//! Error types for the wallet API client
//!
//! Remote-reported and transport failures are not errors at this level: they
//! travel inside [`Outcome::Failure`](crate::outcome::Outcome). The types here
//! cover the cases where a raw result cannot be interpreted at all, or where a
//! request could not be constructed in the first place.

use thiserror::Error;

/// A raw transport result matched neither a success payload nor a well-formed
/// failure envelope
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Legacy envelope string lacked the failure marker or carried fewer
    /// than four `|`-separated fields
    #[error("Malformed failure envelope: expected marker and 4 fields, found {found} fields")]
    MalformedEnvelope { found: usize },

    /// The remote error body is not a `{code, message}` object
    ///
    /// This is a protocol violation by the remote service and is never
    /// defaulted to an empty error.
    #[error("Unparseable remote error body (status: {status}): {source}")]
    ErrorBody {
        status: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// The success body does not match the expected shape
    #[error("Unexpected response body for {target}: {source}")]
    Body {
        target: &'static str,
        body: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DecodeError {
    /// Raw text that failed to decode, if any
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            DecodeError::MalformedEnvelope { .. } => None,
            DecodeError::ErrorBody { body, .. } => Some(body),
            DecodeError::Body { body, .. } => Some(body),
        }
    }
}

/// Error returned by resource operations alongside (never instead of) remote
/// failures
#[derive(Debug, Error)]
pub enum ApiError {
    /// The response could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The request URL could not be built from the base URL and identifiers
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The request payload could not be serialized
    #[error("Failed to encode request payload: {0}")]
    Encode(#[source] serde_json::Error),
}
