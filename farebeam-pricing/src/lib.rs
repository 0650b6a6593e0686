pub mod adjusters;
pub mod calculator;
pub mod context;
pub mod demand;

pub use adjusters::PricingFactor;
pub use calculator::{DynamicPriceCalculator, DynamicPriceResult, PricingConfig, UpsellItem};
pub use context::PricingContext;
pub use demand::{classify_demand, DemandSignals};
