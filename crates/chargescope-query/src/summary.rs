//! Headline metrics over the filtered subset.

use chargescope_types::Session;
use serde::Serialize;

/// The four numbers shown above every view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub sessions: u64,
    pub mean_wait: f64,
    pub total_revenue: f64,
    pub mean_satisfaction: f64,
}

impl MetricSummary {
    pub fn empty() -> Self {
        MetricSummary { sessions: 0, mean_wait: 0.0, total_revenue: 0.0, mean_satisfaction: 0.0 }
    }
}

/// Summarize a subset. All-zero for an empty subset; never fails.
pub fn summarize(subset: &[&Session]) -> MetricSummary {
    if subset.is_empty() {
        return MetricSummary::empty();
    }
    let n = subset.len() as f64;
    MetricSummary {
        sessions: subset.len() as u64,
        mean_wait: subset.iter().map(|s| s.wait_minutes).sum::<f64>() / n,
        total_revenue: subset.iter().map(|s| s.revenue).sum(),
        mean_satisfaction: subset.iter().map(|s| s.satisfaction).sum::<f64>() / n,
    }
}
