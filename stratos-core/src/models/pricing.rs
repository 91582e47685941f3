use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionSide {
    Calls,
    Puts,
}

impl std::fmt::Display for OptionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionSide::Calls => write!(f, "calls"),
            OptionSide::Puts => write!(f, "puts"),
        }
    }
}

impl std::str::FromStr for OptionSide {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "calls" | "call" => Ok(OptionSide::Calls),
            "puts" | "put" => Ok(OptionSide::Puts),
            _ => Err(()),
        }
    }
}

/// One row of the (mock) options chain. All values are static displays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    pub strike: u32,
    pub bid: f64,
    pub ask: f64,
    pub last: f64,
    pub volume: u64,
    pub delta: f64,
}

impl OptionQuote {
    /// Delta rendered with an explicit sign, four decimals.
    pub fn formatted_delta(&self) -> String {
        if self.delta >= 0.0 {
            format!("+{:.4}", self.delta)
        } else {
            format!("{:.4}", self.delta)
        }
    }
}
