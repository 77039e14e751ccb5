//! Tagged success/failure result returned by every resource operation
//!
//! The remote wallet service reports failures as `{ "code": ..., "message": ... }`
//! bodies. [`Outcome`] keeps that shape on the failure side and carries the
//! decoded entity on the success side, so callers never have to guess whether an
//! empty error object means success.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved code reported by [`Outcome::error`] for a successful call
pub const SUCCESS_CODE: &str = "000";

/// Code used when the transport itself could not complete the call
pub const TRANSPORT_ERROR_CODE: &str = "transport_error";

/// Error object returned by the wallet API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Synthetic error object attached to successful results
    pub fn success() -> Self {
        Self::new(SUCCESS_CODE, "")
    }

    /// Error object for a call the transport could not complete
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(TRANSPORT_ERROR_CODE, message)
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// True when the failure originated locally (network unreachable, timeout)
    /// rather than being reported by the remote service
    pub fn is_transport(&self) -> bool {
        self.code == TRANSPORT_ERROR_CODE
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "[{}]", self.code)
        } else {
            write!(f, "[{}] {}", self.code, self.message)
        }
    }
}

/// Result of one resource operation
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorInfo),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Error object for this outcome; the success sentinel for `Success`
    pub fn error(&self) -> ErrorInfo {
        match self {
            Outcome::Success(_) => ErrorInfo::success(),
            Outcome::Failure(err) => err.clone(),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(err) => Outcome::Failure(err.clone()),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Success value, discarding the failure
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, ErrorInfo> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}

impl<T> From<Result<T, ErrorInfo>> for Outcome<T> {
    fn from(result: Result<T, ErrorInfo>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_reports_sentinel_code() {
        let outcome: Outcome<u32> = Outcome::Success(7);
        let err = outcome.error();
        assert_eq!(err.code, SUCCESS_CODE);
        assert!(err.message.is_empty());
        assert!(err.is_success());
    }

    #[test]
    fn test_empty_error_is_not_success() {
        // A default-looking error object must not read as success
        let outcome: Outcome<u32> = Outcome::Failure(ErrorInfo::new("", ""));
        assert!(outcome.is_failure());
        assert!(!outcome.error().is_success());
    }

    #[test]
    fn test_map_and_into_result() {
        let outcome: Outcome<u32> = Outcome::Success(2);
        assert_eq!(outcome.map(|v| v * 10).into_result(), Ok(20));

        let failed: Outcome<u32> = Outcome::Failure(ErrorInfo::new("no_such_wallet", "gone"));
        let err = failed.map(|v| v * 10).into_result().unwrap_err();
        assert_eq!(err.code, "no_such_wallet");
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorInfo::new("bad_request", "nope").to_string(), "[bad_request] nope");
        assert_eq!(ErrorInfo::success().to_string(), "[000]");
        assert!(ErrorInfo::transport("refused").is_transport());
    }
}
