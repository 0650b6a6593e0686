use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};
use farebeam_shared::{DemandLevel, UserSegment};
use serde::{Deserialize, Serialize};

/// Context for one pricing request, assembled by the caller from the trip
/// search and the current session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingContext {
    /// Trip base fare, minor-unit agnostic (caller-defined precision)
    pub base_price: f64,

    /// Opaque ISO 4217-like code; no currency-aware rounding is applied
    pub currency: String,

    /// Route identifier such as "JFK-LAX", used for explainability only
    pub route: String,

    pub departure_date: NaiveDate,

    pub user_segment: UserSegment,

    pub current_demand: DemandLevel,

    /// Hour 0-23 at evaluation time
    pub time_of_day: u32,

    /// 0 (Sunday) - 6 (Saturday) at evaluation time
    pub day_of_week: u32,
}

impl PricingContext {
    /// Build a context whose time-of-day and day-of-week are derived from
    /// the evaluation instant
    pub fn at(
        now: DateTime<Utc>,
        base_price: f64,
        currency: String,
        route: String,
        departure_date: NaiveDate,
        user_segment: UserSegment,
        current_demand: DemandLevel,
    ) -> Self {
        Self {
            base_price,
            currency,
            route,
            departure_date,
            user_segment,
            current_demand,
            time_of_day: now.hour(),
            day_of_week: now.weekday().num_days_from_sunday(),
        }
    }

    /// Whole days until departure, rounded up.
    ///
    /// Recomputed against `now` on every call: a context held across real
    /// time must not carry a stale day count into the banded rules.
    pub fn days_until_departure(&self, now: DateTime<Utc>) -> i64 {
        let departure = self.departure_date.and_time(NaiveTime::MIN).and_utc();
        let seconds = (departure - now).num_seconds();
        (seconds as f64 / 86_400.0).ceil() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn leisure_context(departure_date: NaiveDate) -> PricingContext {
        PricingContext {
            base_price: 45000.0,
            currency: "USD".to_string(),
            route: "JFK-LAX".to_string(),
            departure_date,
            user_segment: UserSegment::Leisure,
            current_demand: DemandLevel::Medium,
            time_of_day: 10,
            day_of_week: 1,
        }
    }

    #[test]
    fn test_days_until_departure_rounds_up() {
        // 5.5 calendar days out counts as 6
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap();
        let context = leisure_context(NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());

        assert_eq!(context.days_until_departure(now), 6);
    }

    #[test]
    fn test_days_until_departure_tracks_now() {
        let context = leisure_context(NaiveDate::from_ymd_opt(2025, 6, 16).unwrap());

        let early = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2025, 6, 15, 8, 0, 0).unwrap();

        assert_eq!(context.days_until_departure(early), 107);
        assert_eq!(context.days_until_departure(late), 1);
    }

    #[test]
    fn test_at_derives_session_fields() {
        // 2025-06-15 is a Sunday
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 19, 45, 0).unwrap();
        let context = PricingContext::at(
            now,
            45000.0,
            "USD".to_string(),
            "JFK-LAX".to_string(),
            NaiveDate::from_ymd_opt(2025, 7, 20).unwrap(),
            UserSegment::Leisure,
            DemandLevel::Medium,
        );

        assert_eq!(context.time_of_day, 19);
        assert_eq!(context.day_of_week, 0);
    }
}
