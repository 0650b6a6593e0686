use farebeam_shared::{DemandLevel, ProductCategory, UserSegment};
use serde::{Deserialize, Serialize};

use crate::calculator::UpsellItem;
use crate::context::PricingContext;

/// One multiplicative adjustment together with its human-readable
/// explanation. Produced fresh per adjuster invocation, never shared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingFactor {
    pub name: String,
    pub multiplier: f64,
    pub impact: String,
}

impl PricingFactor {
    fn new(name: &str, multiplier: f64, impact: &str) -> Self {
        Self {
            name: name.to_string(),
            multiplier,
            impact: impact.to_string(),
        }
    }
}

/// A single pricing rule: a pure function of the item, its context, and the
/// day count to departure
pub type Adjuster = fn(&UpsellItem, &PricingContext, i64) -> PricingFactor;

/// The ordered rule set folded by the calculator. Multiplication commutes,
/// so order only decides which factor is reported as dominant on ties.
pub const ADJUSTERS: [Adjuster; 5] = [
    demand_factor,
    advance_purchase_factor,
    segment_factor,
    time_of_day_factor,
    day_of_week_factor,
];

pub fn demand_factor(_item: &UpsellItem, context: &PricingContext, _days_out: i64) -> PricingFactor {
    match context.current_demand {
        DemandLevel::High => {
            PricingFactor::new("High demand", 1.15, "Popular route, high search volume")
        }
        DemandLevel::Low => PricingFactor::new("Low demand", 0.90, "Special offer"),
        DemandLevel::Medium => {
            PricingFactor::new("Normal demand", 1.0, "Typical search volume")
        }
    }
}

/// Flexibility bands are checked in order; a 5-day departure is last-minute
/// only, never also short-notice.
pub fn advance_purchase_factor(
    _item: &UpsellItem,
    _context: &PricingContext,
    days_out: i64,
) -> PricingFactor {
    if days_out < 7 {
        PricingFactor::new("Last-minute booking", 1.20, "Departure less than 7 days away")
    } else if days_out < 14 {
        PricingFactor::new("Short notice", 1.10, "Departure less than 14 days away")
    } else if days_out > 90 {
        PricingFactor::new("Early bird", 0.95, "Booked more than 90 days ahead")
    } else {
        PricingFactor::new("Standard booking window", 1.0, "Typical advance purchase")
    }
}

pub fn segment_factor(item: &UpsellItem, context: &PricingContext, _days_out: i64) -> PricingFactor {
    use ProductCategory::{Baggage, Insurance, Lounge, Priority, Seat};

    match (context.user_segment, item.category) {
        (UserSegment::Business, Seat | Priority | Lounge) => PricingFactor::new(
            "Business traveller premium",
            1.10,
            "Premium ancillary for business travellers",
        ),
        (UserSegment::Budget, _) => {
            PricingFactor::new("Budget segment discount", 0.92, "Price-sensitive segment")
        }
        (UserSegment::Family, Baggage | Insurance) => PricingFactor::new(
            "Family bundle discount",
            0.95,
            "Family-relevant ancillary",
        ),
        (UserSegment::Business | UserSegment::Family | UserSegment::Leisure, _) => {
            PricingFactor::new("Standard segment pricing", 1.0, "No segment adjustment")
        }
    }
}

pub fn time_of_day_factor(
    _item: &UpsellItem,
    context: &PricingContext,
    _days_out: i64,
) -> PricingFactor {
    match context.time_of_day {
        12..=14 | 18..=21 => {
            PricingFactor::new("Peak hours", 1.03, "Midday or evening booking window")
        }
        hour if hour >= 23 || hour <= 6 => {
            PricingFactor::new("Off-peak hours", 0.98, "Late-night booking window")
        }
        _ => PricingFactor::new("Standard hours", 1.0, "No time-of-day adjustment"),
    }
}

pub fn day_of_week_factor(
    _item: &UpsellItem,
    context: &PricingContext,
    _days_out: i64,
) -> PricingFactor {
    match context.day_of_week {
        0 | 5 | 6 => PricingFactor::new("Weekend travel", 1.05, "Friday to Sunday demand"),
        2 | 3 => PricingFactor::new("Midweek discount", 0.97, "Quiet midweek days"),
        _ => PricingFactor::new("Standard weekday", 1.0, "No day-of-week adjustment"),
    }
}
