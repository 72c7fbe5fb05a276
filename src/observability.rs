//! Tracing setup and in-process request counters

use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[derive(Debug, Default)]
pub struct Metrics {
    info_served: AtomicU64,
    image_served: AtomicU64,
    upstream_failed: AtomicU64,
    not_found: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info_served(&self) {
        self.info_served.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "info_served", "Metric incremented");
    }

    pub fn image_served(&self) {
        self.image_served.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "image_served", "Metric incremented");
    }

    pub fn upstream_failed(&self) {
        self.upstream_failed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "upstream_failed", "Metric incremented");
    }

    pub fn not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(counter = "not_found", "Metric incremented");
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            info_served: self.info_served.load(Ordering::Relaxed),
            image_served: self.image_served.load(Ordering::Relaxed),
            upstream_failed: self.upstream_failed.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
        }
    }

    /// Logs the current counters at info level, e.g. once the server has drained
    pub fn log_snapshot(&self) -> MetricsSnapshot {
        let snapshot = self.snapshot();
        tracing::info!(
            info_served = snapshot.info_served,
            image_served = snapshot.image_served,
            upstream_failed = snapshot.upstream_failed,
            not_found = snapshot.not_found,
            "Request counters"
        );
        snapshot
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub info_served: u64,
    pub image_served: u64,
    pub upstream_failed: u64,
    pub not_found: u64,
}
