//! Staking pool sample data.

use crate::models::{RiskLevel, StakingPool};

pub fn staking_pools() -> Vec<StakingPool> {
    vec![
        StakingPool {
            id: "stratos-native".to_string(),
            name: "STRATOS Native Staking".to_string(),
            apy: "24.5%".to_string(),
            total_staked: "$12.4M".to_string(),
            user_staked: "5,420".to_string(),
            lock_period: "30 days".to_string(),
            min_stake: "100".to_string(),
            max_stake: "50,000".to_string(),
            is_active: true,
            risk_level: RiskLevel::Low,
            description: "Stake STRATOS tokens to secure the network and earn rewards"
                .to_string(),
        },
        StakingPool {
            id: "usdc-vault".to_string(),
            name: "USDC Strategy Vault".to_string(),
            apy: "18.7%".to_string(),
            total_staked: "$8.9M".to_string(),
            user_staked: "2,150".to_string(),
            lock_period: "14 days".to_string(),
            min_stake: "50".to_string(),
            max_stake: "25,000".to_string(),
            is_active: true,
            risk_level: RiskLevel::Medium,
            description: "Automated USDC yield farming with AI-optimized strategies"
                .to_string(),
        },
        StakingPool {
            id: "agent-rewards".to_string(),
            name: "Agent Performance Pool".to_string(),
            apy: "31.2%".to_string(),
            total_staked: "$6.2M".to_string(),
            user_staked: "0".to_string(),
            lock_period: "60 days".to_string(),
            min_stake: "500".to_string(),
            max_stake: "100,000".to_string(),
            is_active: true,
            risk_level: RiskLevel::High,
            description: "Stake to earn rewards from top-performing AI agents".to_string(),
        },
    ]
}

/// Ten-point cumulative rewards series for the staking dashboard chart.
pub fn rewards_series() -> Vec<f64> {
    vec![
        100.0, 105.0, 110.0, 108.0, 115.0, 122.0, 118.0, 125.0, 130.0, 135.0,
    ]
}
