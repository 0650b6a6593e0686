pub mod analytics;
pub mod commission;
pub mod models;
pub mod rates;

pub use analytics::RevenueAnalyticsAggregator;
pub use commission::CommissionLedgerCalculator;
pub use models::{
    BookingRecord, CommissionPayout, ManagedRate, MarginBucket, MonthlyRevenue,
    RateWithRevenue, RevenueAnalyticsSummary, SupplierRate,
};
pub use rates::{can_access_discounted_rates, ComplianceRateCalculator, RateParams, RevenueConfig};

/// Round to 2 decimals, half away from zero. Single global convention; no
/// currency-aware precision.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
