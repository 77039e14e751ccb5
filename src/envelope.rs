//! Result envelope codec
//!
//! Converts the raw result of one transport call into an [`Outcome`]. A failed
//! call is described by a [`FailureEnvelope`] with four ordered fields:
//!
//! 0. the reserved failure marker (`!<ERROR>`)
//! 1. the transport status (HTTP status code, or `transport_error`)
//! 2. the remote error body (`{"code": ..., "message": ...}`)
//! 3. the echoed request payload or query string
//!
//! The legacy single-string encoding joins those fields with `|`. It is kept
//! for interoperability with stored results; new call sites work with
//! [`TransportResult`] directly.
//!
//! ## Known gap: marker collision
//!
//! A success body that happens to begin with the literal marker text is
//! classified as a failure, exactly as the legacy encoding always did. The
//! prefix check is intentionally left unchanged.

use crate::errors::DecodeError;
use crate::outcome::{ErrorInfo, Outcome};
use serde::de::DeserializeOwned;

/// Reserved prefix of a legacy failure envelope
pub const FAILURE_MARKER: &str = "!<ERROR>";

/// Field delimiter of the legacy envelope
pub const DELIMITER: char = '|';

/// Echo value used when the request carried neither body nor query
pub const NO_PAYLOAD: &str = "<no payload>";

/// Structured description of a failed transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureEnvelope {
    /// HTTP status code, or `transport_error` when no response was received
    pub status: String,
    /// Error body as reported by the remote service (JSON)
    pub error_body: String,
    /// Request payload or query string that was sent
    pub request_echo: String,
}

impl FailureEnvelope {
    pub fn new(
        status: impl Into<String>,
        error_body: impl Into<String>,
        request_echo: impl Into<String>,
    ) -> Self {
        Self {
            status: status.into(),
            error_body: error_body.into(),
            request_echo: request_echo.into(),
        }
    }

    /// Encode as `!<ERROR>|status|error-json|echo`
    pub fn to_legacy(&self) -> String {
        format!(
            "{FAILURE_MARKER}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.status, self.error_body, self.request_echo
        )
    }

    /// Parse a legacy envelope string.
    ///
    /// The string is split into exactly four fields; any delimiter past the
    /// third stays inside the echoed payload. The first field must be the
    /// failure marker.
    pub fn parse_legacy(raw: &str) -> Result<Self, DecodeError> {
        let fields: Vec<&str> = raw.splitn(4, DELIMITER).collect();
        if fields.len() != 4 || fields[0] != FAILURE_MARKER {
            return Err(DecodeError::MalformedEnvelope {
                found: fields.len(),
            });
        }

        Ok(Self::new(fields[1], fields[2], fields[3]))
    }

    /// Parse the remote error body
    pub fn error_info(&self) -> Result<ErrorInfo, DecodeError> {
        serde_json::from_str(&self.error_body).map_err(|source| DecodeError::ErrorBody {
            status: self.status.clone(),
            body: self.error_body.clone(),
            source,
        })
    }
}

/// Raw result of one transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportResult {
    /// Success status; raw response body
    Body(String),
    /// Non-success status or transport failure
    Failure(FailureEnvelope),
}

impl TransportResult {
    pub fn is_failure(&self) -> bool {
        match self {
            TransportResult::Body(raw) => has_failure_marker(raw),
            TransportResult::Failure(_) => true,
        }
    }

    /// Legacy single-string form of this result
    pub fn into_legacy(self) -> String {
        match self {
            TransportResult::Body(raw) => raw,
            TransportResult::Failure(envelope) => envelope.to_legacy(),
        }
    }
}

/// Literal prefix check used to recognize legacy envelopes
pub fn has_failure_marker(raw: &str) -> bool {
    raw.starts_with(FAILURE_MARKER)
}

/// Decode a transport result into the expected shape `T`
pub fn decode<T: DeserializeOwned>(result: &TransportResult) -> Result<Outcome<T>, DecodeError> {
    match result {
        TransportResult::Body(raw) => decode_raw(raw),
        TransportResult::Failure(envelope) => envelope.error_info().map(Outcome::Failure),
    }
}

/// Decode a legacy raw string: either an envelope or a JSON success body
pub fn decode_raw<T: DeserializeOwned>(raw: &str) -> Result<Outcome<T>, DecodeError> {
    if has_failure_marker(raw) {
        let envelope = FailureEnvelope::parse_legacy(raw)?;
        return envelope.error_info().map(Outcome::Failure);
    }

    serde_json::from_str(raw)
        .map(Outcome::Success)
        .map_err(|source| DecodeError::Body {
            target: std::any::type_name::<T>(),
            body: raw.to_string(),
            source,
        })
}

/// Decode a result whose success body carries no information (DELETE calls)
pub fn decode_ack(result: &TransportResult) -> Result<Outcome<()>, DecodeError> {
    match result {
        TransportResult::Body(raw) if has_failure_marker(raw) => {
            let envelope = FailureEnvelope::parse_legacy(raw)?;
            envelope.error_info().map(Outcome::Failure)
        }
        TransportResult::Body(_) => Ok(Outcome::Success(())),
        TransportResult::Failure(envelope) => envelope.error_info().map(Outcome::Failure),
    }
}
