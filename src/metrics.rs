//! Service Metrics
//!
//! Process-wide counters for the scrape endpoint. Counters only go up:
//! there is no reset or decrement for the lifetime of the process, so a
//! scraper can always treat them as monotonic.
//!
//! Exported in Prometheus text exposition format.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::Verdict;

/// Shared metrics recorder.
///
/// Increment paths are single atomic adds; safe under arbitrary concurrent
/// callers and never held across request processing.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Predictions served, any verdict.
    requests_total: AtomicU64,
    /// Malicious verdicts. Incremented at most once per verdict.
    malicious_total: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed prediction.
    pub fn record(&self, verdict: &Verdict) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if verdict.malicious {
            self.malicious_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn requests_count(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    pub fn malicious_count(&self) -> u64 {
        self.malicious_total.load(Ordering::Relaxed)
    }

    /// Export all counters in Prometheus text format.
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str("# HELP malicious_url_counter_total Count of malicious URLs detected\n");
        output.push_str("# TYPE malicious_url_counter_total counter\n");
        output.push_str(&format!(
            "malicious_url_counter_total {}\n",
            self.malicious_count()
        ));

        output.push_str("# HELP predict_requests_total Total number of predictions served\n");
        output.push_str("# TYPE predict_requests_total counter\n");
        output.push_str(&format!("predict_requests_total {}\n", self.requests_count()));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn verdict(malicious: bool) -> Verdict {
        Verdict {
            malicious,
            score: if malicious { 0.9 } else { 0.1 },
        }
    }

    #[test]
    fn test_record_counts_malicious_only_once() {
        let metrics = Metrics::new();
        metrics.record(&verdict(true));
        metrics.record(&verdict(false));
        metrics.record(&verdict(true));

        assert_eq!(metrics.requests_count(), 3);
        assert_eq!(metrics.malicious_count(), 2);
    }

    #[test]
    fn test_prometheus_export() {
        let metrics = Metrics::new();
        metrics.record(&verdict(true));

        let exposition = metrics.render();
        assert!(exposition.contains("# TYPE malicious_url_counter_total counter"));
        assert!(exposition.contains("malicious_url_counter_total 1"));
        assert!(exposition.contains("predict_requests_total 1"));
    }

    #[test]
    fn test_concurrent_increments() {
        let metrics = Arc::new(Metrics::new());
        let mut handles = Vec::new();

        for _ in 0..8 {
            let metrics = Arc::clone(&metrics);
            handles.push(std::thread::spawn(move || {
                for i in 0..1000 {
                    metrics.record(&verdict(i % 2 == 0));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.requests_count(), 8000);
        assert_eq!(metrics.malicious_count(), 4000);
    }
}
