//! Translation lookup metrics.
//!
//! Counts how lookups were served so translation gaps show up on `/health`
//! during content review, not only as raw keys on the page.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a `TranslationTable`.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Lookups answered by the requested language
    direct_hits: AtomicUsize,

    /// Lookups answered by the fallback language
    fallback_hits: AtomicUsize,

    /// Lookups that found nothing and returned the key itself
    missing: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing(&self) {
        self.missing.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    pub fn missing(&self) -> usize {
        self.missing.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let direct = self.direct_hits();
        let fallback = self.fallback_hits();
        let missing = self.missing();
        let total = direct + fallback + missing;

        let fallback_rate = if total > 0 {
            ((fallback + missing) as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups: total,
            direct_hits: direct,
            fallback_hits: fallback,
            missing,
            fallback_rate,
        }
    }
}

/// Snapshot of lookup metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub direct_hits: usize,
    pub fallback_hits: usize,
    pub missing: usize,

    /// Percentage of lookups not served by the requested language (0.0 - 100.0)
    pub fallback_rate: f64,
}

impl MetricsReport {
    /// Format the report as a human-readable string.
    pub fn format(&self) -> String {
        format!(
            "Translation lookups: {} ({} direct, {} fallback, {} missing, {:.1}% not direct)",
            self.lookups, self.direct_hits, self.fallback_hits, self.missing, self.fallback_rate
        )
    }
}
