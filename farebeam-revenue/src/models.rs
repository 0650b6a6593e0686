use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A supplier rate candidate before revenue management
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRate {
    pub rate_id: Uuid,

    /// Supplier base amount
    pub amount: f64,

    pub currency: String,

    /// Supplier-advertised floor; absent on some channels
    pub suggested_selling_price: Option<f64>,

    /// Opaque supplier payload (board type, cancellation policies, ...)
    pub metadata: serde_json::Value,
}

/// A rate after revenue management, priced for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagedRate {
    pub rate_id: Uuid,

    /// Final selling price shown to the user
    pub amount: f64,

    /// The supplier's original amount, preserved alongside the managed price
    pub supplier_amount: f64,

    pub currency: String,

    pub revenue: RateWithRevenue,

    pub metadata: serde_json::Value,
}

/// Revenue breakdown and display eligibility for one supplier rate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateWithRevenue {
    pub original_rate: f64,

    /// Commission percentage actually used (after the cap)
    pub margin: f64,

    pub additional_markup: f64,

    pub final_selling_price: f64,

    pub suggested_selling_price: f64,

    pub commission: f64,

    /// Display aggregate: capped margin plus markup, not used in the price
    /// formula itself
    pub total_markup: f64,

    pub can_display: bool,

    pub display_restrictions: Vec<String>,
}

/// Commission split for one confirmed booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionPayout {
    pub gross_commission: f64,
    pub platform_fee: f64,
    pub net_commission: f64,
    pub payout_date: DateTime<Utc>,
}

/// A confirmed booking as seen by the reporting cadence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: Uuid,
    pub amount: f64,
    pub margin: f64,
    pub booked_at: DateTime<Utc>,
}

/// Aggregated revenue view over a reporting window of bookings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueAnalyticsSummary {
    pub total_revenue: f64,
    pub total_commission: f64,
    pub average_margin: f64,
    pub revenue_by_margin: Vec<MarginBucket>,
    pub monthly_trend: Vec<MonthlyRevenue>,
}

/// One fixed margin band in the revenue breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginBucket {
    pub label: String,
    pub count: usize,
    pub revenue: f64,
    pub commission: f64,
}

/// Revenue for one calendar month of the trailing-twelve-month trend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRevenue {
    pub month: String,
    pub revenue: f64,
    pub commission: f64,
}
