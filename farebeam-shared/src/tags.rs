use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Traveller segment attached to a pricing request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserSegment {
    Business,
    Leisure,
    Family,
    Budget,
}

/// Relative search/booking volume on a route
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

/// Ancillary product categories offered at checkout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Seat,
    Priority,
    Lounge,
    Baggage,
    Insurance,
    Meal,
    FastTrack,
    Other,
}

/// Access cohort for rate display rules
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserGroup {
    Public,
    Cug,
    Member,
}

/// Loyalty programme tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoyaltyTier {
    Standard,
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseTagError {
    #[error("Unknown user segment: {0}")]
    UserSegment(String),

    #[error("Unknown demand level: {0}")]
    DemandLevel(String),

    #[error("Unknown user group: {0}")]
    UserGroup(String),

    #[error("Unknown loyalty tier: {0}")]
    LoyaltyTier(String),
}

impl FromStr for UserSegment {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "business" => Ok(Self::Business),
            "leisure" => Ok(Self::Leisure),
            "family" => Ok(Self::Family),
            "budget" => Ok(Self::Budget),
            _ => Err(ParseTagError::UserSegment(s.to_string())),
        }
    }
}

impl FromStr for DemandLevel {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseTagError::DemandLevel(s.to_string())),
        }
    }
}

impl FromStr for ProductCategory {
    type Err = ParseTagError;

    /// Unknown categories map to `Other` rather than failing: suppliers add
    /// ancillary types faster than the rule tables learn about them, and an
    /// unrecognised category must still price neutrally.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "seat" => Self::Seat,
            "priority" => Self::Priority,
            "lounge" => Self::Lounge,
            "baggage" => Self::Baggage,
            "insurance" => Self::Insurance,
            "meal" => Self::Meal,
            "fast_track" | "fasttrack" => Self::FastTrack,
            _ => Self::Other,
        })
    }
}

impl FromStr for UserGroup {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "cug" => Ok(Self::Cug),
            "member" => Ok(Self::Member),
            _ => Err(ParseTagError::UserGroup(s.to_string())),
        }
    }
}

impl FromStr for LoyaltyTier {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            "platinum" => Ok(Self::Platinum),
            _ => Err(ParseTagError::LoyaltyTier(s.to_string())),
        }
    }
}
