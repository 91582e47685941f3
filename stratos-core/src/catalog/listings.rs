//! Marketplace sample agents.

use crate::models::{AgentListing, Personality};

const BASE_SERIES: [f64; 10] = [
    100.0, 102.0, 105.0, 103.0, 108.0, 112.0, 115.0, 118.0, 116.0, 122.0,
];

fn scaled_series(scale: f64, offset: f64) -> Vec<f64> {
    BASE_SERIES.iter().map(|v| v * scale + offset).collect()
}

/// The published marketplace agents.
pub fn listings() -> Vec<AgentListing> {
    vec![
        AgentListing {
            id: "1".to_string(),
            name: "MagicTrend".to_string(),
            description: "Sophisticated momentum capturing options trader who capitalizes \
                          on market directional moves and volatility for optimal \
                          risk-adjusted returns."
                .to_string(),
            apy: "31.7%".to_string(),
            pnl: "+22.4%".to_string(),
            volume: "$1.2M".to_string(),
            sharpe: "2.31".to_string(),
            max_drawdown: "-4.2%".to_string(),
            win_rate: "78%".to_string(),
            personality: Personality::Aggressive,
            risk_score: 85,
            is_active: true,
            performance: BASE_SERIES.to_vec(),
        },
        AgentListing {
            id: "2".to_string(),
            name: "Bean Warrior".to_string(),
            description: "Conservative delta-hedged carry trader who employs low-risk \
                          strategies with consistent performance and minimal drawdowns."
                .to_string(),
            apy: "12.5%".to_string(),
            pnl: "+8.7%".to_string(),
            volume: "$850K".to_string(),
            sharpe: "1.85".to_string(),
            max_drawdown: "-2.1%".to_string(),
            win_rate: "85%".to_string(),
            personality: Personality::Conservative,
            risk_score: 25,
            is_active: true,
            performance: scaled_series(0.8, 20.0),
        },
        AgentListing {
            id: "3".to_string(),
            name: "Sphinx".to_string(),
            description: "Advanced Quant AI leveraging ML-driven options theta decay \
                          strategies with dynamic risk management and portfolio \
                          optimization."
                .to_string(),
            apy: "24.8%".to_string(),
            pnl: "+18.3%".to_string(),
            volume: "$2.1M".to_string(),
            sharpe: "2.12".to_string(),
            max_drawdown: "-5.8%".to_string(),
            win_rate: "72%".to_string(),
            personality: Personality::Moderate,
            risk_score: 60,
            is_active: true,
            performance: scaled_series(1.2, -10.0),
        },
        AgentListing {
            id: "4".to_string(),
            name: "EVF Navigator".to_string(),
            description: "A meticulous continuous volatility forecaster optimizing entries \
                          across markets and timeframes. Revolutionary EVF Model to maximum \
                          opportunity. The original."
                .to_string(),
            apy: "18.9%".to_string(),
            pnl: "+15.2%".to_string(),
            volume: "$1.8M".to_string(),
            sharpe: "1.95".to_string(),
            max_drawdown: "-3.7%".to_string(),
            win_rate: "74%".to_string(),
            personality: Personality::Moderate,
            risk_score: 55,
            is_active: true,
            performance: scaled_series(0.9, 5.0),
        },
        AgentListing {
            id: "5".to_string(),
            name: "Elysium Shield".to_string(),
            description: "Conservative range trading specialist focusing on lower \
                          volatility assets. Professional risk management and capital \
                          preservation."
                .to_string(),
            apy: "14.3%".to_string(),
            pnl: "+11.8%".to_string(),
            volume: "$950K".to_string(),
            sharpe: "2.05".to_string(),
            max_drawdown: "-2.9%".to_string(),
            win_rate: "82%".to_string(),
            personality: Personality::Conservative,
            risk_score: 30,
            is_active: true,
            performance: scaled_series(0.7, 15.0),
        },
    ]
}

/// Filter listings by case-insensitive substring over name and description.
/// An empty query returns everything.
pub fn search_listings(query: &str) -> Vec<AgentListing> {
    let query = query.trim();
    if query.is_empty() {
        return listings();
    }
    listings()
        .into_iter()
        .filter(|listing| listing.matches(query))
        .collect()
}
