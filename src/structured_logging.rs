//! Structured logging for resource operations

use crate::observability::CorrelationId;
use crate::outcome::ErrorInfo;

/// Per-operation logger; every event carries the same correlation id
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    operation: &'static str,
    correlation_id: CorrelationId,
}

impl StructuredLogger {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            correlation_id: CorrelationId::new(),
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    pub fn log_request(&self, method: &str, url: &str) {
        tracing::debug!(
            correlation_id = %self.correlation_id,
            operation = %self.operation,
            method = %method,
            url = %url,
            "Sending wallet API request"
        );
    }

    pub fn log_success(&self, latency_ms: u64) {
        tracing::debug!(
            correlation_id = %self.correlation_id,
            operation = %self.operation,
            latency_ms = %latency_ms,
            "Wallet API request succeeded"
        );
    }

    pub fn log_failure(&self, error: &ErrorInfo, latency_ms: u64) {
        if error.is_transport() {
            tracing::warn!(
                correlation_id = %self.correlation_id,
                operation = %self.operation,
                message = %error.message,
                latency_ms = %latency_ms,
                "Wallet API unreachable"
            );
        } else {
            tracing::info!(
                correlation_id = %self.correlation_id,
                operation = %self.operation,
                code = %error.code,
                message = %error.message,
                latency_ms = %latency_ms,
                "Wallet API reported failure"
            );
        }
    }

    pub fn log_decode_error(&self, error: &dyn std::error::Error) {
        tracing::error!(
            correlation_id = %self.correlation_id,
            operation = %self.operation,
            error = %error,
            "Failed to decode wallet API response"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_keeps_operation_and_id() {
        let logger = StructuredLogger::new("get_wallet");
        assert_eq!(logger.operation(), "get_wallet");
        let cloned = logger.clone();
        assert_eq!(cloned.correlation_id(), logger.correlation_id());

        // Logging without a subscriber installed must be a no-op
        logger.log_request("GET", "http://127.0.0.1:8090/v2/wallets/w1");
        logger.log_failure(&ErrorInfo::transport("connection refused"), 3);
        logger.log_success(1);
    }
}
