use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Counters for a policy evaluation run. Fee totals are kept in integer
/// cents so accumulation stays atomic.
#[derive(Debug, Default)]
pub struct PolicyMetrics {
    evaluations_total: AtomicU64,
    non_compliant_total: AtomicU64,
    cargo_flagged_total: AtomicU64,
    fees_cents_total: AtomicU64,
    total_latency_millis: AtomicU64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub evaluations_total: u64,
    pub non_compliant_total: u64,
    pub cargo_flagged_total: u64,
    pub fees_total: f64,
    pub avg_latency_millis: f64,
}

impl PolicyMetrics {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn inc_evaluation(&self) {
        self.evaluations_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_non_compliant(&self) {
        self.non_compliant_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_cargo_flagged(&self) {
        self.cargo_flagged_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_fees(&self, fees: f64) {
        self.fees_cents_total
            .fetch_add((fees * 100.0).round() as u64, Ordering::Relaxed);
    }

    pub fn observe_latency(&self, duration: Duration) {
        self.total_latency_millis
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let evaluations = self.evaluations_total.load(Ordering::Relaxed);
        let latency = self.total_latency_millis.load(Ordering::Relaxed);

        MetricsSnapshot {
            evaluations_total: evaluations,
            non_compliant_total: self.non_compliant_total.load(Ordering::Relaxed),
            cargo_flagged_total: self.cargo_flagged_total.load(Ordering::Relaxed),
            fees_total: self.fees_cents_total.load(Ordering::Relaxed) as f64 / 100.0,
            avg_latency_millis: if evaluations == 0 {
                0.0
            } else {
                latency as f64 / evaluations as f64
            },
        }
    }
}

pub fn init_tracing(service_name: &str) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info,acme_core=info,acme_dataset=info", service_name))
        });

        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .with_span_list(true)
            .init();
    });
}
