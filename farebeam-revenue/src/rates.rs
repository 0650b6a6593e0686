use farebeam_shared::{LoyaltyTier, UserGroup};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{ManagedRate, RateWithRevenue, SupplierRate};
use crate::round2;

/// Commission and compliance tunables for rate management
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueConfig {
    /// Commission percentage applied when the caller supplies none
    pub default_margin: f64,

    /// Hard cap on the commission percentage used in the price computation
    pub max_margin: f64,

    /// Fraction of the SSP below which a selling price is in violation
    pub ssp_violation_threshold: f64,
}

impl Default for RevenueConfig {
    fn default() -> Self {
        Self {
            default_margin: 10.0,
            max_margin: 30.0,
            ssp_violation_threshold: 0.95,
        }
    }
}

/// Per-request overrides for rate computation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateParams {
    pub margin: Option<f64>,

    /// Extra markup percentage on top of commission; deliberately uncapped
    pub additional_markup: Option<f64>,

    /// Defaults to true when unset
    pub respect_ssp: Option<bool>,

    pub user_group: Option<UserGroup>,
}

/// Prices supplier rates against commission margins and the supplier's
/// suggested selling price floor
pub struct ComplianceRateCalculator {
    config: RevenueConfig,
}

impl ComplianceRateCalculator {
    pub fn new(config: RevenueConfig) -> Self {
        Self { config }
    }

    /// Compute the selling price for one supplier rate and check it against
    /// the SSP floor.
    ///
    /// A margin above the cap is truncated for the computation but still
    /// reported via a restriction message carrying the configured cap. The
    /// rate is hidden only when SSP enforcement, an actual violation, and a
    /// public user group all hold at once; CUG and member groups always see
    /// the rate.
    pub fn calculate_rate(
        &self,
        base_rate: f64,
        suggested_selling_price: f64,
        params: &RateParams,
    ) -> RateWithRevenue {
        let requested_margin = params.margin.unwrap_or(self.config.default_margin);
        let final_margin = requested_margin.min(self.config.max_margin);
        let additional_markup = params.additional_markup.unwrap_or(0.0);
        let respect_ssp = params.respect_ssp.unwrap_or(true);

        let commission = base_rate * final_margin / 100.0;
        let markup_amount = base_rate * additional_markup / 100.0;
        let final_selling_price = round2(base_rate + commission + markup_amount);
        let total_markup = round2(final_margin + additional_markup);

        let below_threshold =
            final_selling_price < suggested_selling_price * self.config.ssp_violation_threshold;
        let is_public = params.user_group == Some(UserGroup::Public);
        let can_display = !(respect_ssp && below_threshold && is_public);

        let mut display_restrictions = Vec::new();
        if !can_display {
            display_restrictions.push("Rate below SSP - requires CUG access".to_string());
        }
        if requested_margin > self.config.max_margin {
            display_restrictions.push(format!(
                "Margin exceeds maximum allowed ({}%)",
                self.config.max_margin
            ));
        }

        RateWithRevenue {
            original_rate: base_rate,
            margin: final_margin,
            additional_markup,
            final_selling_price,
            suggested_selling_price,
            commission,
            total_markup,
            can_display,
            display_restrictions,
        }
    }

    /// Revenue-manage a batch of supplier rates. A rate without an
    /// advertised SSP is floored at 15% over its supplier amount.
    pub fn apply_revenue_management(
        &self,
        rates: Vec<SupplierRate>,
        params: &RateParams,
    ) -> Vec<ManagedRate> {
        let managed: Vec<ManagedRate> = rates
            .into_iter()
            .map(|rate| {
                let ssp = rate.suggested_selling_price.unwrap_or(rate.amount * 1.15);
                let revenue = self.calculate_rate(rate.amount, ssp, params);

                ManagedRate {
                    rate_id: rate.rate_id,
                    amount: revenue.final_selling_price,
                    supplier_amount: rate.amount,
                    currency: rate.currency,
                    revenue,
                    metadata: rate.metadata,
                }
            })
            .collect();

        info!("Revenue management applied to {} rates", managed.len());
        managed
    }
}

impl Default for ComplianceRateCalculator {
    fn default() -> Self {
        Self::new(RevenueConfig::default())
    }
}

/// True when the user may see rates priced below the supplier SSP
pub fn can_access_discounted_rates(tier: LoyaltyTier, group: UserGroup) -> bool {
    match group {
        UserGroup::Cug => true,
        UserGroup::Member => matches!(tier, LoyaltyTier::Gold | LoyaltyTier::Platinum),
        UserGroup::Public => false,
    }
}
