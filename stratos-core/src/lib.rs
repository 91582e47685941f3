pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;

pub use builder::{
    BuilderController, BuilderSession, Classification, IntentClassifier, ResponseTiming,
    SessionState, SubmitOutcome, GREETING,
};
pub use catalog::{
    listings, lookup_strategy, lookup_venue, option_chain, rewards_series, search_listings,
    staking_pools, strategies, venues, StrategyInfo, UNDERLYING_SYMBOL,
};
pub use config::{
    ensure_config_dir, get_config_dir, BuilderConfig, ConfigLoadError, DisplayConfig,
    LoggingConfig, StratosConfig,
};
pub use error::{CliErrorDisplay, StratosError, StratosResult};
pub use models::{
    AgentConfiguration, AgentListing, Message, MessageAuthor, OptionQuote, OptionSide,
    Personality, RiskLevel, StakingPool, StrategyId, VenueInfo, VenueKind,
};
