pub mod clock;
pub mod tags;

pub use clock::{Clock, FixedClock, SystemClock};
pub use tags::{
    DemandLevel, LoyaltyTier, ParseTagError, ProductCategory, UserGroup, UserSegment,
};
