//! Telemetry Module
//!
//! Anonymous in-process counters for the question endpoint:
//! - How many requests were served or rejected
//! - How many questions went out, and how often the bank came up short
//! - Average handling latency
//!
//! Nothing about the caller is recorded.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Aggregated statistics for reporting
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TelemetryStats {
    /// Question requests answered (including empty answers)
    pub requests_served: u64,
    /// Question requests rejected as malformed
    pub requests_rejected: u64,
    /// Total questions returned across all requests
    pub questions_served: u64,
    /// Requests that got fewer questions than asked for
    pub short_results: u64,
    /// Requests that got no question at all
    pub empty_results: u64,
    /// Average handling latency (ms)
    pub avg_latency_ms: f64,
    /// Seconds since the collector was created
    pub uptime_seconds: u64,
}

/// Lock-free telemetry collector shared by all handlers
pub struct TelemetryCollector {
    requests_served: AtomicU64,
    requests_rejected: AtomicU64,
    questions_served: AtomicU64,
    short_results: AtomicU64,
    empty_results: AtomicU64,
    total_latency_us: AtomicU64,
    start_time: Instant,
}

impl TelemetryCollector {
    pub fn new() -> Self {
        Self {
            requests_served: AtomicU64::new(0),
            requests_rejected: AtomicU64::new(0),
            questions_served: AtomicU64::new(0),
            short_results: AtomicU64::new(0),
            empty_results: AtomicU64::new(0),
            total_latency_us: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a completed selection
    pub fn record_selection(&self, requested: usize, served: usize, latency: Duration) {
        self.requests_served.fetch_add(1, Ordering::Relaxed);
        self.questions_served.fetch_add(served as u64, Ordering::Relaxed);
        // Microseconds so sub-millisecond selections still register
        self.total_latency_us
            .fetch_add(latency.as_micros() as u64, Ordering::Relaxed);

        if served < requested {
            self.short_results.fetch_add(1, Ordering::Relaxed);
        }
        if served == 0 {
            self.empty_results.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a request refused before selection
    pub fn record_rejection(&self) {
        self.requests_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Snapshot of the current counters
    pub fn get_stats(&self) -> TelemetryStats {
        let served = self.requests_served.load(Ordering::Relaxed);
        let total_latency_us = self.total_latency_us.load(Ordering::Relaxed);

        TelemetryStats {
            requests_served: served,
            requests_rejected: self.requests_rejected.load(Ordering::Relaxed),
            questions_served: self.questions_served.load(Ordering::Relaxed),
            short_results: self.short_results.load(Ordering::Relaxed),
            empty_results: self.empty_results.load(Ordering::Relaxed),
            avg_latency_ms: if served > 0 {
                total_latency_us as f64 / 1000.0 / served as f64
            } else {
                0.0
            },
            uptime_seconds: self.uptime_seconds(),
        }
    }
}

impl Default for TelemetryCollector {
    fn default() -> Self {
        Self::new()
    }
}
