use farebeam_shared::DemandLevel;
use serde::{Deserialize, Serialize};

/// Raw route activity counters from the search funnel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandSignals {
    pub searches_last_24h: u32,

    /// Accepted for interface compatibility; the current classification
    /// rule does not read it
    pub bookings_last_24h: u32,

    /// Trailing average daily searches on the route
    pub avg_searches: f64,
}

/// Classify route demand from search volume relative to the trailing
/// average. The high band is strictly above 1.5, so a ratio of exactly 1.5
/// is medium.
pub fn classify_demand(signals: &DemandSignals) -> DemandLevel {
    let ratio = f64::from(signals.searches_last_24h) / signals.avg_searches;

    if ratio > 1.5 {
        DemandLevel::High
    } else if ratio < 0.7 {
        DemandLevel::Low
    } else {
        DemandLevel::Medium
    }
}
