pub mod agent_config;
pub mod listing;
pub mod message;
pub mod pricing;
pub mod staking;
pub mod venue;

pub use agent_config::{AgentConfiguration, RiskLevel, StrategyId};
pub use listing::{AgentListing, Personality};
pub use message::{Message, MessageAuthor};
pub use pricing::{OptionQuote, OptionSide};
pub use staking::StakingPool;
pub use venue::{VenueInfo, VenueKind};
