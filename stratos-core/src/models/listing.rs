use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    Conservative,
    Moderate,
    Aggressive,
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Personality::Conservative => write!(f, "Conservative"),
            Personality::Moderate => write!(f, "Moderate"),
            Personality::Aggressive => write!(f, "Aggressive"),
        }
    }
}

impl std::str::FromStr for Personality {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "conservative" => Ok(Personality::Conservative),
            "moderate" => Ok(Personality::Moderate),
            "aggressive" => Ok(Personality::Aggressive),
            _ => Err(()),
        }
    }
}

/// A published agent in the marketplace.
///
/// All figures are display metrics; no trading logic backs them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentListing {
    pub id: String,
    pub name: String,
    pub description: String,
    pub apy: String,
    pub pnl: String,
    pub volume: String,
    pub sharpe: String,
    pub max_drawdown: String,
    pub win_rate: String,
    pub personality: Personality,
    /// 0-100; drives the risk-bar rendering.
    pub risk_score: u8,
    pub is_active: bool,
    /// Ten-point normalized performance series.
    pub performance: Vec<f64>,
}

impl AgentListing {
    pub fn pnl_is_positive(&self) -> bool {
        self.pnl.starts_with('+')
    }

    /// Case-insensitive substring match over name and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}
