use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Strategy templates available in the catalog.
///
/// The chat builder only ever produces `DeltaNeutral`, `OptionsWheel`,
/// `Arbitrage`, or `Momentum`; the remaining templates exist for the
/// advanced-editor catalog and marketplace displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyId {
    DeltaNeutral,
    OptionsWheel,
    Arbitrage,
    Momentum,
    MeanReversion,
    Dispersion,
}

impl std::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyId::DeltaNeutral => write!(f, "delta-neutral"),
            StrategyId::OptionsWheel => write!(f, "options-wheel"),
            StrategyId::Arbitrage => write!(f, "arbitrage"),
            StrategyId::Momentum => write!(f, "momentum"),
            StrategyId::MeanReversion => write!(f, "mean-reversion"),
            StrategyId::Dispersion => write!(f, "dispersion"),
        }
    }
}

impl std::str::FromStr for StrategyId {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "delta-neutral" => Ok(StrategyId::DeltaNeutral),
            "options-wheel" => Ok(StrategyId::OptionsWheel),
            "arbitrage" => Ok(StrategyId::Arbitrage),
            "momentum" => Ok(StrategyId::Momentum),
            "mean-reversion" => Ok(StrategyId::MeanReversion),
            "dispersion" => Ok(StrategyId::Dispersion),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// The derived agent profile shown in the builder preview.
///
/// Exactly one configuration is live per session. Every classification
/// replaces the whole object; there is no field-by-field merging, so a
/// low-risk label can never end up paired with another rule's venue set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentConfiguration {
    pub name: String,
    pub description: String,
    pub strategy: StrategyId,
    pub risk_level: RiskLevel,
    /// Venue identifiers, de-duplicated; order carries no meaning.
    /// Ids are not validated against the venue catalog at write time.
    pub venues: BTreeSet<String>,
    /// Percentage in [0, 100]. Zero only in the unconfigured state.
    pub confidence: u8,
}

impl AgentConfiguration {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        strategy: StrategyId,
        risk_level: RiskLevel,
        venues: &[&str],
        confidence: u8,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            strategy,
            risk_level,
            venues: venues.iter().map(|v| v.to_string()).collect(),
            confidence: confidence.min(100),
        }
    }

    /// The initial state before any user message has been classified.
    pub fn unconfigured() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            strategy: StrategyId::Momentum,
            risk_level: RiskLevel::Medium,
            venues: BTreeSet::new(),
            confidence: 0,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.confidence > 0
    }
}
