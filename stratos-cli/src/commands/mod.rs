pub mod agents;
pub mod build;
pub mod catalog;

pub use agents::{handle_agents_command, AgentsCommand};
pub use build::{handle_build_command, BuildCommand};
