//! Consistency checks across the static catalog: the builder's venue sets,
//! the marketplace listings, staking pools, and the options chain.

use stratos_core::{
    listings, lookup_strategy, lookup_venue, option_chain, search_listings, staking_pools,
    strategies, venues, IntentClassifier, OptionSide, Personality, RiskLevel,
};

mod venue_tests {
    use super::*;

    #[test]
    fn test_catalog_has_five_venues() {
        assert_eq!(venues().len(), 5);
    }

    #[test]
    fn test_classifier_output_only_references_known_venues() {
        let classifier = IntentClassifier::new();

        for input in [
            "delta neutral please",
            "an options wheel",
            "arbitrage hunter",
            "whatever you think is best",
        ] {
            let classification = classifier.classify(input);
            for venue in &classification.configuration.venues {
                assert!(
                    lookup_venue(venue).is_some(),
                    "classifier produced unknown venue '{venue}' for input '{input}'"
                );
            }
        }
    }
}

mod strategy_tests {
    use super::*;

    #[test]
    fn test_six_strategy_templates() {
        assert_eq!(strategies().len(), 6);
    }

    #[test]
    fn test_strategy_names_are_unique() {
        let all = strategies();
        let mut names: Vec<&str> = all.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn test_classifier_strategies_have_catalog_entries() {
        let classifier = IntentClassifier::new();

        for input in ["delta neutral", "options", "arbitrage", "fallback input"] {
            let strategy = classifier.classify(input).configuration.strategy;
            assert!(
                lookup_strategy(strategy).is_some(),
                "no catalog entry for strategy produced by '{input}'"
            );
        }
    }
}

mod marketplace_tests {
    use super::*;

    #[test]
    fn test_listings_have_complete_display_metrics() {
        for listing in listings() {
            assert!(!listing.name.is_empty());
            assert!(!listing.description.is_empty());
            assert!(listing.apy.ends_with('%'), "{}", listing.name);
            assert!(listing.win_rate.ends_with('%'), "{}", listing.name);
            assert!(listing.risk_score <= 100);
            assert_eq!(listing.performance.len(), 10);
        }
    }

    #[test]
    fn test_search_and_personality_filter_compose() {
        let conservative: Vec<_> = search_listings("")
            .into_iter()
            .filter(|l| l.personality == Personality::Conservative)
            .collect();
        assert_eq!(conservative.len(), 2);

        let hits = search_listings("delta-hedged");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Bean Warrior");
    }
}

mod staking_tests {
    use super::*;

    #[test]
    fn test_pools_cover_all_risk_levels() {
        let pools = staking_pools();
        for risk in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert!(
                pools.iter().any(|p| p.risk_level == risk),
                "no pool at risk level {risk}"
            );
        }
    }
}

mod pricing_tests {
    use super::*;

    #[test]
    fn test_chain_bid_ask_spreads_are_positive() {
        for side in [OptionSide::Calls, OptionSide::Puts] {
            for quote in option_chain(side) {
                assert!(
                    quote.ask > quote.bid,
                    "inverted spread at {} strike {}",
                    side,
                    quote.strike
                );
            }
        }
    }

    #[test]
    fn test_call_deltas_fall_and_put_deltas_steepen_with_strike() {
        let calls = option_chain(OptionSide::Calls);
        assert!(calls.windows(2).all(|w| w[0].delta > w[1].delta));

        let puts = option_chain(OptionSide::Puts);
        assert!(puts.windows(2).all(|w| w[0].delta > w[1].delta));
    }
}
