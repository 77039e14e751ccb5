//! Metrics collection and export module

use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use std::time::Instant;

/// Global metrics registry
pub struct Metrics {
    registry: Registry,

    // Counters
    pub requests_total: IntCounterVec,
    pub remote_failures: IntCounter,
    pub transport_failures: IntCounter,
    pub decode_errors: IntCounter,

    // Histograms
    pub request_latency: Histogram,
}

impl Metrics {
    /// Create new metrics instance
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "wallet_api_requests_total",
                "Wallet API requests by operation",
            ),
            &["operation"],
        )?;

        let remote_failures = IntCounter::with_opts(Opts::new(
            "wallet_api_remote_failures_total",
            "Requests the wallet service answered with a non-success status",
        ))?;

        let transport_failures = IntCounter::with_opts(Opts::new(
            "wallet_api_transport_failures_total",
            "Requests that never received a response",
        ))?;

        let decode_errors = IntCounter::with_opts(Opts::new(
            "wallet_api_decode_errors_total",
            "Responses that could not be decoded",
        ))?;

        let request_latency = Histogram::with_opts(
            HistogramOpts::new("wallet_api_request_latency_seconds", "Wallet API call latency")
                .buckets(vec![0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0, 30.0]),
        )?;

        registry.register(Box::new(requests_total.clone()))?;
        registry.register(Box::new(remote_failures.clone()))?;
        registry.register(Box::new(transport_failures.clone()))?;
        registry.register(Box::new(decode_errors.clone()))?;
        registry.register(Box::new(request_latency.clone()))?;

        Ok(Self {
            registry,
            requests_total,
            remote_failures,
            transport_failures,
            decode_errors,
            request_latency,
        })
    }

    /// Get the registry for exporting
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Prometheus text exposition of every registered metric
    pub fn gather_text(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Global metrics instance
pub fn metrics() -> &'static Metrics {
    static METRICS: once_cell::sync::Lazy<Metrics> =
        once_cell::sync::Lazy::new(|| Metrics::new().expect("Failed to initialize metrics"));
    &METRICS
}

/// Timer helper for measuring operation duration
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Finish the timer and record to the request latency histogram
    pub fn finish(self) -> u64 {
        let elapsed = self.start.elapsed();
        metrics().request_latency.observe(elapsed.as_secs_f64());
        elapsed.as_millis() as u64
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
