use chrono::{Datelike, Duration};
use farebeam_shared::{Clock, SystemClock};

use crate::models::CommissionPayout;
use crate::round2;

/// Platform share of gross commission, fixed by commercial agreement
const PLATFORM_FEE_RATE: f64 = 0.05;

/// Splits booking commission between the platform and the agent and
/// schedules the payout
pub struct CommissionLedgerCalculator<C: Clock = SystemClock> {
    clock: C,
}

impl CommissionLedgerCalculator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for CommissionLedgerCalculator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> CommissionLedgerCalculator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Commission split for one confirmed booking.
    ///
    /// Gross, fee, and net are each rounded to 2 decimals independently, so
    /// fee + net may differ from gross by up to 0.01. The payout lands on
    /// the next Monday; a computation run on a Monday pays out the same day.
    pub fn calculate_commission_payout(&self, booking_amount: f64, margin: f64) -> CommissionPayout {
        let gross = booking_amount * margin / 100.0;
        let fee = gross * PLATFORM_FEE_RATE;
        let net = gross - fee;

        let now = self.clock.now();
        let days_to_monday = (8 - i64::from(now.weekday().num_days_from_sunday())) % 7;
        let payout_date = now + Duration::days(days_to_monday);

        CommissionPayout {
            gross_commission: round2(gross),
            platform_fee: round2(fee),
            net_commission: round2(net),
            payout_date,
        }
    }
}
