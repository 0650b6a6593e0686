use farebeam_shared::{Clock, ProductCategory, SystemClock};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::adjusters::{PricingFactor, ADJUSTERS};
use crate::context::PricingContext;

/// Bounds and reporting knobs for dynamic pricing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Floor for the composed multiplier
    pub min_multiplier: f64,

    /// Ceiling for the composed multiplier
    pub max_multiplier: f64,

    /// Confidence reported on every result
    pub confidence: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            min_multiplier: 0.80,
            max_multiplier: 1.25,
            confidence: 0.85,
        }
    }
}

/// An ancillary item being priced for one traveller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsellItem {
    pub name: String,
    pub category: ProductCategory,
    pub base_price: f64,
}

/// Fully explained price adjustment for one item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynamicPriceResult {
    pub adjusted_price: i64,
    pub original_price: f64,
    pub adjustment_percent: i32,
    pub adjustment_amount: f64,
    pub reason: String,
    pub factors: Vec<PricingFactor>,
    pub confidence: f64,
}

/// Composes the adjuster rule set into a bounded, explained price for one
/// upsell item. Stateless apart from configuration and the injected clock.
pub struct DynamicPriceCalculator<C: Clock = SystemClock> {
    config: PricingConfig,
    clock: C,
}

impl DynamicPriceCalculator<SystemClock> {
    pub fn new(config: PricingConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for DynamicPriceCalculator<SystemClock> {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

impl<C: Clock> DynamicPriceCalculator<C> {
    pub fn with_clock(config: PricingConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Price one item under the given context.
    ///
    /// Each adjuster contributes a multiplier and an explanation; the
    /// composed product is clamped once at the end, so an individual factor
    /// may exceed the bounds but the final price never does. Negative or
    /// non-finite base prices are a caller contract violation and propagate
    /// mathematically.
    pub fn calculate_price(&self, item: &UpsellItem, context: &PricingContext) -> DynamicPriceResult {
        let days_out = context.days_until_departure(self.clock.now());

        let mut multiplier = 1.0;
        let mut factors = Vec::with_capacity(ADJUSTERS.len());
        for adjuster in ADJUSTERS {
            let factor = adjuster(item, context, days_out);
            multiplier *= factor.multiplier;
            factors.push(factor);
        }

        let clamped = multiplier.clamp(self.config.min_multiplier, self.config.max_multiplier);

        let adjusted_price = (item.base_price * clamped).round() as i64;
        let adjustment_amount = adjusted_price as f64 - item.base_price;
        // Derived from the clamped multiplier so percent and amount agree
        let adjustment_percent = ((clamped - 1.0) * 100.0).round() as i32;
        let reason = build_reason(adjustment_percent, &factors);

        debug!(
            "Priced {} on {}: {} -> {} ({}%)",
            item.name, context.route, item.base_price, adjusted_price, adjustment_percent
        );

        DynamicPriceResult {
            adjusted_price,
            original_price: item.base_price,
            adjustment_percent,
            adjustment_amount,
            reason,
            factors,
            confidence: self.config.confidence,
        }
    }
}

/// Names the dominant cause but reports the compounded magnitude: the
/// factor deviating most from 1.0 (first wins ties) is labelled with the
/// overall percentage.
fn build_reason(adjustment_percent: i32, factors: &[PricingFactor]) -> String {
    if adjustment_percent == 0 {
        return "Standard pricing".to_string();
    }

    let mut dominant: Option<&PricingFactor> = None;
    for factor in factors {
        let deviation = (factor.multiplier - 1.0).abs();
        match dominant {
            Some(best) if deviation <= (best.multiplier - 1.0).abs() => {}
            _ => dominant = Some(factor),
        }
    }

    match dominant {
        Some(factor) if adjustment_percent > 0 => {
            format!("{} (+{}%)", factor.name, adjustment_percent)
        }
        Some(factor) => format!("{} (-{}%)", factor.name, adjustment_percent.abs()),
        None => "Standard pricing".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use farebeam_shared::{DemandLevel, FixedClock, UserSegment};

    // 2025-06-10 is a Tuesday
    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2025, 6, 10, 12, 0, 0).unwrap())
    }

    fn calculator() -> DynamicPriceCalculator<FixedClock> {
        DynamicPriceCalculator::with_clock(PricingConfig::default(), fixed_clock())
    }

    fn item(category: ProductCategory, base_price: f64) -> UpsellItem {
        UpsellItem {
            name: "Extra legroom seat".to_string(),
            category,
            base_price,
        }
    }

    fn context(
        departure_date: NaiveDate,
        segment: UserSegment,
        demand: DemandLevel,
        time_of_day: u32,
        day_of_week: u32,
    ) -> PricingContext {
        PricingContext {
            base_price: 45000.0,
            currency: "USD".to_string(),
            route: "JFK-LAX".to_string(),
            departure_date,
            user_segment: segment,
            current_demand: demand,
            time_of_day,
            day_of_week,
        }
    }

    fn neutral_context() -> PricingContext {
        // 30 days out, medium demand, leisure, off-window hour, Monday
        context(
            NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            UserSegment::Leisure,
            DemandLevel::Medium,
            10,
            1,
        )
    }

    #[test]
    fn test_neutral_context_is_standard_pricing() {
        let result = calculator().calculate_price(&item(ProductCategory::Seat, 4500.0), &neutral_context());

        assert_eq!(result.adjusted_price, 4500);
        assert_eq!(result.adjustment_percent, 0);
        assert_eq!(result.adjustment_amount, 0.0);
        assert_eq!(result.reason, "Standard pricing");
        assert_eq!(result.factors.len(), 5);
        assert_eq!(result.confidence, 0.85);
    }

    #[test]
    fn test_compounded_surge_clamps_at_ceiling() {
        // High demand, 4 days out, business seat, peak hour, Saturday:
        // 1.15 * 1.20 * 1.10 * 1.03 * 1.05 = 1.6417 -> clamped to 1.25
        let ctx = context(
            NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            UserSegment::Business,
            DemandLevel::High,
            13,
            6,
        );
        let result = calculator().calculate_price(&item(ProductCategory::Seat, 100.0), &ctx);

        assert_eq!(result.adjusted_price, 125);
        assert_eq!(result.adjustment_percent, 25);
        assert_eq!(result.adjustment_amount, 25.0);
        // Last-minute deviates most (0.20), reported with the overall percent
        assert_eq!(result.reason, "Last-minute booking (+25%)");
    }

    #[test]
    fn test_compounded_discount_clamps_at_floor() {
        // Low demand, 120 days out, budget meal, off-peak, Wednesday:
        // 0.90 * 0.95 * 0.92 * 0.98 * 0.97 = 0.7478 -> clamped to 0.80
        let ctx = context(
            NaiveDate::from_ymd_opt(2025, 10, 8).unwrap(),
            UserSegment::Budget,
            DemandLevel::Low,
            2,
            3,
        );
        let result = calculator().calculate_price(&item(ProductCategory::Meal, 200.0), &ctx);

        assert_eq!(result.adjusted_price, 160);
        assert_eq!(result.adjustment_percent, -20);
        assert_eq!(result.adjustment_amount, -40.0);
        assert_eq!(result.reason, "Low demand (-20%)");
    }

    #[test]
    fn test_six_days_out_is_last_minute_only() {
        let ctx = context(
            NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(),
            UserSegment::Leisure,
            DemandLevel::Medium,
            10,
            1,
        );
        let result = calculator().calculate_price(&item(ProductCategory::Seat, 1000.0), &ctx);

        assert_eq!(result.adjusted_price, 1200);
        assert_eq!(result.reason, "Last-minute booking (+20%)");
    }

    #[test]
    fn test_reason_tie_break_prefers_first_factor() {
        // Short notice (1.10) and business premium (1.10) deviate equally;
        // the earlier adjuster wins the tie
        let ctx = context(
            NaiveDate::from_ymd_opt(2025, 6, 20).unwrap(),
            UserSegment::Business,
            DemandLevel::Medium,
            10,
            1,
        );
        let result = calculator().calculate_price(&item(ProductCategory::Seat, 1000.0), &ctx);

        assert_eq!(result.adjustment_percent, 21);
        assert_eq!(result.reason, "Short notice (+21%)");
    }

    #[test]
    fn test_bounds_invariant_across_contexts() {
        let calc = calculator();
        let base = 10_000.0;

        for segment in [
            UserSegment::Business,
            UserSegment::Leisure,
            UserSegment::Family,
            UserSegment::Budget,
        ] {
            for demand in [DemandLevel::Low, DemandLevel::Medium, DemandLevel::High] {
                for day in 0..7 {
                    let ctx = context(
                        NaiveDate::from_ymd_opt(2025, 6, 13).unwrap(),
                        segment,
                        demand,
                        13,
                        day,
                    );
                    let result = calc.calculate_price(&item(ProductCategory::Lounge, base), &ctx);
                    let ratio = result.adjusted_price as f64 / base;

                    assert!(ratio >= 0.795 && ratio <= 1.255, "ratio {} out of bounds", ratio);
                    assert_eq!(
                        result.adjusted_price as f64 - result.original_price,
                        result.adjustment_amount
                    );
                }
            }
        }
    }

    #[test]
    fn test_identical_inputs_yield_identical_results() {
        let calc = calculator();
        let seat = item(ProductCategory::Seat, 4500.0);
        let ctx = neutral_context();

        let first = calc.calculate_price(&seat, &ctx);
        let second = calc.calculate_price(&seat, &ctx);

        assert_eq!(first.adjusted_price, second.adjusted_price);
        assert_eq!(first.reason, second.reason);
        assert_eq!(first.adjustment_percent, second.adjustment_percent);
    }

    #[test]
    fn test_result_serializes_for_the_http_layer() {
        let result = calculator().calculate_price(&item(ProductCategory::Seat, 4500.0), &neutral_context());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["adjusted_price"], 4500);
        assert_eq!(json["reason"], "Standard pricing");
        assert_eq!(json["factors"].as_array().unwrap().len(), 5);
    }
}
