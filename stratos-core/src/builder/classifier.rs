//! Keyword-driven intent classification for the chat builder.
//!
//! Free-text user input is lower-cased and tested against an ordered list of
//! keyword rules; the first matching rule supplies both the canned assistant
//! reply and the full configuration template. The final rule has no keywords
//! and matches unconditionally, so classification never fails for non-empty
//! input.

use serde::{Deserialize, Serialize};

use crate::models::{AgentConfiguration, RiskLevel, StrategyId};

/// Confidence attached to the delta-neutral template.
pub const DELTA_NEUTRAL_CONFIDENCE: u8 = 95;
/// Confidence attached to the options-wheel template.
pub const OPTIONS_WHEEL_CONFIDENCE: u8 = 88;
/// Confidence attached to the arbitrage template.
pub const ARBITRAGE_CONFIDENCE: u8 = 92;
/// Confidence attached to the momentum fallback template.
pub const FALLBACK_CONFIDENCE: u8 = 78;

/// One (predicate, template) pair in the rule table.
#[derive(Debug, Clone)]
struct ClassificationRule {
    /// Lowercase substrings; any single match triggers the rule.
    /// An empty list matches unconditionally (the fallback).
    keywords: &'static [&'static str],
    response: &'static str,
    template: AgentConfiguration,
}

impl ClassificationRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|kw| normalized.contains(kw))
    }
}

/// The outcome of classifying one user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub response_text: String,
    pub configuration: AgentConfiguration,
}

/// Maps free-text input to a response/configuration pair.
///
/// Rule order is fixed and significant: delta-neutral is checked before
/// options, so a message mentioning both always resolves to delta-neutral.
/// That precedence is a documented policy, not an accident.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<ClassificationRule>,
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    pub fn new() -> Self {
        let rules = vec![
            ClassificationRule {
                keywords: &["delta", "neutral"],
                response: "I've set up a delta-neutral agent for you. It pairs spot \
                           and hedge legs to stay market-neutral, keeping risk low. \
                           Check the preview and let me know if you'd like adjustments.",
                template: AgentConfiguration::new(
                    "Delta Hedge Agent",
                    "Market-neutral spread capture across paired spot and hedge venues",
                    StrategyId::DeltaNeutral,
                    RiskLevel::Low,
                    &["uniswap", "1inch"],
                    DELTA_NEUTRAL_CONFIDENCE,
                ),
            },
            ClassificationRule {
                keywords: &["option"],
                response: "Options it is. I've configured an options-wheel agent that \
                           sells covered premium on a rolling schedule at moderate risk. \
                           The preview on the right has the full setup.",
                template: AgentConfiguration::new(
                    "Options Wheel Agent",
                    "Rolling covered premium selling with collateral parked in lending markets",
                    StrategyId::OptionsWheel,
                    RiskLevel::Medium,
                    &["dydx", "aave"],
                    OPTIONS_WHEEL_CONFIDENCE,
                ),
            },
            ClassificationRule {
                keywords: &["arbitrage"],
                response: "Done, here's an arbitrage agent that watches price gaps \
                           across DEX routes and takes the low-risk side of each \
                           discrepancy. Review the preview to fine-tune it.",
                template: AgentConfiguration::new(
                    "Arbitrage Scout",
                    "Cross-venue price discrepancy capture over DEX and aggregator routes",
                    StrategyId::Arbitrage,
                    RiskLevel::Low,
                    &["uniswap", "1inch"],
                    ARBITRAGE_CONFIDENCE,
                ),
            },
            // Fallback: matches any input the rules above did not claim.
            ClassificationRule {
                keywords: &[],
                response: "I've drafted a momentum agent as a starting point based on \
                           your message. Tell me more about the strategy you have in \
                           mind (for example delta-neutral, options, or arbitrage) \
                           and I'll refine it.",
                template: AgentConfiguration::new(
                    "Momentum Starter Agent",
                    "Trend-following entries on liquid pairs, generated from your requirements",
                    StrategyId::Momentum,
                    RiskLevel::Medium,
                    &["uniswap", "1inch"],
                    FALLBACK_CONFIDENCE,
                ),
            },
        ];

        Self { rules }
    }

    /// Classify one non-empty user message.
    ///
    /// Input is lower-cased before matching; no other normalization is
    /// applied. Deterministic: equal input always yields an equal pair.
    pub fn classify(&self, input: &str) -> Classification {
        let normalized = input.to_lowercase();

        let rule = self
            .rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .unwrap_or_else(|| self.rules.last().expect("rule table is never empty"));

        Classification {
            response_text: rule.response.to_string(),
            configuration: rule.template.clone(),
        }
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
