use serde::{Deserialize, Serialize};

use super::RiskLevel;

/// A (mock) staking pool with fixed display metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakingPool {
    pub id: String,
    pub name: String,
    pub apy: String,
    pub total_staked: String,
    pub user_staked: String,
    pub lock_period: String,
    pub min_stake: String,
    pub max_stake: String,
    pub is_active: bool,
    pub risk_level: RiskLevel,
    pub description: String,
}
