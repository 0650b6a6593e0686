use chrono::{Datelike, Months};
use farebeam_shared::{Clock, SystemClock};

use crate::models::{BookingRecord, MarginBucket, MonthlyRevenue, RevenueAnalyticsSummary};

/// Fixed margin bands, evaluated low to high, first match wins
const MARGIN_BANDS: [(f64, &str); 4] = [
    (5.0, "0-5%"),
    (10.0, "6-10%"),
    (15.0, "11-15%"),
    (20.0, "16-20%"),
];

const TOP_BAND: &str = "21%+";

/// Reduces a reporting window of confirmed bookings into totals, margin
/// bands, and a trailing-twelve-month trend
pub struct RevenueAnalyticsAggregator<C: Clock = SystemClock> {
    clock: C,
}

impl RevenueAnalyticsAggregator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for RevenueAnalyticsAggregator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RevenueAnalyticsAggregator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Aggregate a window of bookings.
    ///
    /// `average_margin` divides by the booking count and is NaN for an
    /// empty slice; callers must guard empty input. The monthly trend is
    /// always 12 entries, oldest month first, zero-filled where no booking
    /// falls in a month.
    pub fn generate_revenue_analytics(&self, bookings: &[BookingRecord]) -> RevenueAnalyticsSummary {
        let total_revenue: f64 = bookings.iter().map(|b| b.amount).sum();
        let total_commission: f64 = bookings.iter().map(commission_of).sum();
        let average_margin =
            bookings.iter().map(|b| b.margin).sum::<f64>() / bookings.len() as f64;

        RevenueAnalyticsSummary {
            total_revenue,
            total_commission,
            average_margin,
            revenue_by_margin: margin_breakdown(bookings),
            monthly_trend: self.monthly_trend(bookings),
        }
    }

    fn monthly_trend(&self, bookings: &[BookingRecord]) -> Vec<MonthlyRevenue> {
        let today = self.clock.now().date_naive();

        (0..12u32)
            .rev()
            .map(|months_back| {
                let anchor = today
                    .checked_sub_months(Months::new(months_back))
                    .unwrap_or(today);

                let mut revenue = 0.0;
                let mut commission = 0.0;
                for booking in bookings {
                    let booked = booking.booked_at.date_naive();
                    if booked.year() == anchor.year() && booked.month() == anchor.month() {
                        revenue += booking.amount;
                        commission += commission_of(booking);
                    }
                }

                MonthlyRevenue {
                    month: anchor.format("%b %Y").to_string(),
                    revenue,
                    commission,
                }
            })
            .collect()
    }
}

fn commission_of(booking: &BookingRecord) -> f64 {
    booking.amount * booking.margin / 100.0
}

fn margin_breakdown(bookings: &[BookingRecord]) -> Vec<MarginBucket> {
    let mut buckets: Vec<MarginBucket> = MARGIN_BANDS
        .iter()
        .map(|(_, label)| label)
        .chain(std::iter::once(&TOP_BAND))
        .map(|label| MarginBucket {
            label: (*label).to_string(),
            count: 0,
            revenue: 0.0,
            commission: 0.0,
        })
        .collect();

    for booking in bookings {
        let index = MARGIN_BANDS
            .iter()
            .position(|(upper, _)| booking.margin <= *upper)
            .unwrap_or(MARGIN_BANDS.len());

        let bucket = &mut buckets[index];
        bucket.count += 1;
        bucket.revenue += booking.amount;
        bucket.commission += commission_of(booking);
    }

    buckets
}
