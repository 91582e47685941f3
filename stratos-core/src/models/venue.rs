use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueKind {
    Dex,
    Aggregator,
    Lending,
    Perpetuals,
}

impl std::fmt::Display for VenueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VenueKind::Dex => write!(f, "DEX"),
            VenueKind::Aggregator => write!(f, "Aggregator"),
            VenueKind::Lending => write!(f, "Lending"),
            VenueKind::Perpetuals => write!(f, "Perpetuals"),
        }
    }
}

/// A (mock) trading platform referenced by agent configurations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueInfo {
    pub id: String,
    pub name: String,
    pub kind: VenueKind,
}

impl VenueInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: VenueKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}
