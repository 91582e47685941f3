//! Hardcoded catalog data backing the marketplace, staking, and pricing
//! views. Everything here is static display data; there is no live feed.

pub mod listings;
pub mod pricing;
pub mod staking;

pub use listings::{listings, search_listings};
pub use pricing::{option_chain, UNDERLYING_SYMBOL};
pub use staking::{rewards_series, staking_pools};

use crate::models::{RiskLevel, StrategyId, VenueInfo, VenueKind};

/// Display metadata for a strategy template.
#[derive(Debug, Clone)]
pub struct StrategyInfo {
    pub id: StrategyId,
    pub name: &'static str,
    pub risk: RiskLevel,
}

/// All supported trading venues.
pub fn venues() -> Vec<VenueInfo> {
    vec![
        VenueInfo::new("uniswap", "Uniswap V3", VenueKind::Dex),
        VenueInfo::new("1inch", "1inch", VenueKind::Aggregator),
        VenueInfo::new("aave", "Aave", VenueKind::Lending),
        VenueInfo::new("compound", "Compound", VenueKind::Lending),
        VenueInfo::new("dydx", "dYdX", VenueKind::Perpetuals),
    ]
}

/// Look up a venue by identifier. Misses are expected for free-form ids
/// written by the builder; callers render the raw id in that case.
pub fn lookup_venue(id: &str) -> Option<VenueInfo> {
    venues().into_iter().find(|v| v.id == id)
}

/// All strategy templates shown in the advanced editor.
pub fn strategies() -> Vec<StrategyInfo> {
    vec![
        StrategyInfo {
            id: StrategyId::DeltaNeutral,
            name: "Delta-Neutral Arbitrage",
            risk: RiskLevel::Low,
        },
        StrategyInfo {
            id: StrategyId::Momentum,
            name: "Momentum Trading",
            risk: RiskLevel::Medium,
        },
        StrategyInfo {
            id: StrategyId::MeanReversion,
            name: "Mean Reversion",
            risk: RiskLevel::Medium,
        },
        StrategyInfo {
            id: StrategyId::OptionsWheel,
            name: "Options Wheel",
            risk: RiskLevel::Low,
        },
        StrategyInfo {
            id: StrategyId::Arbitrage,
            name: "Cross-DEX Arbitrage",
            risk: RiskLevel::Low,
        },
        StrategyInfo {
            id: StrategyId::Dispersion,
            name: "Dispersion Trading",
            risk: RiskLevel::High,
        },
    ]
}

pub fn lookup_strategy(id: StrategyId) -> Option<StrategyInfo> {
    strategies().into_iter().find(|s| s.id == id)
}
