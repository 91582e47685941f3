//! End-to-end tests for the conversational builder flow: submit a message,
//! wait out the scheduled reveal, and check the transcript and live
//! configuration afterwards. Time is paused, so the simulated delays cost
//! nothing.

use std::time::Duration;

use stratos_core::{
    BuilderController, MessageAuthor, ResponseTiming, StrategyId, SubmitOutcome, GREETING,
};

mod full_exchange_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_delta_neutral_request_end_to_end() {
        let mut controller = BuilderController::new();

        assert_eq!(controller.session().transcript().len(), 1);
        assert_eq!(controller.session().transcript()[0].text, GREETING);

        let outcome =
            controller.submit("Create a delta-neutral strategy that trades ETH/USDC on Uniswap");
        assert!(outcome.is_scheduled());

        // Placeholder is visible while the reply is pending.
        assert_eq!(controller.session().placeholder_count(), 1);
        assert!(controller.session().is_awaiting_response());
        assert!(!controller.session().configuration().is_configured());

        let config = controller.run_pending().await.cloned().unwrap();

        assert_eq!(config.strategy, StrategyId::DeltaNeutral);
        assert_eq!(config.confidence, 95);
        assert!(config.venues.contains("uniswap"));
        assert!(config.venues.contains("1inch"));

        // Greeting, user message, final reply. No placeholder left.
        assert_eq!(controller.session().transcript().len(), 3);
        assert_eq!(controller.session().placeholder_count(), 0);
        assert!(!controller.session().is_awaiting_response());

        let last = controller.session().transcript().last().unwrap();
        assert_eq!(last.author, MessageAuthor::Assistant);
        assert!(!last.text.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_classification_is_deterministic() {
        let input = "I want an options wheel on my ETH";

        let mut first = BuilderController::new();
        first.submit(input);
        let config_a = first.run_pending().await.cloned().unwrap();

        let mut second = BuilderController::new();
        second.submit(input);
        let config_b = second.run_pending().await.cloned().unwrap();

        assert_eq!(config_a, config_b);
        assert_eq!(config_a.strategy, StrategyId::OptionsWheel);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rule_precedence_over_later_keywords() {
        // Mentions both delta-neutral and arbitrage; the earlier rule wins.
        let mut controller = BuilderController::new();
        controller.submit("delta neutral arbitrage combo");
        let config = controller.run_pending().await.cloned().unwrap();

        assert_eq!(config.strategy, StrategyId::DeltaNeutral);
        assert_eq!(config.confidence, 95);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmatched_input_falls_back_to_momentum() {
        let mut controller = BuilderController::new();
        controller.submit("do something profitable please");
        let config = controller.run_pending().await.cloned().unwrap();

        assert_eq!(config.strategy, StrategyId::Momentum);
        assert_eq!(config.confidence, 78);
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_exchange_replaces_configuration_wholesale() {
        let mut controller = BuilderController::new();

        controller.submit("arbitrage between exchanges");
        controller.run_pending().await;
        let first = controller.session().configuration().clone();
        assert_eq!(first.strategy, StrategyId::Arbitrage);

        controller.submit("switch to an options wheel");
        controller.run_pending().await;
        let second = controller.session().configuration().clone();

        assert_eq!(second.strategy, StrategyId::OptionsWheel);
        // No field survives from the previous configuration.
        assert!(second.venues.contains("dydx"));
        assert!(!second.venues.contains("uniswap"));
    }
}

mod rejection_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_submission_leaves_no_trace() {
        let mut controller = BuilderController::new();

        assert_eq!(controller.submit("   \n\t "), SubmitOutcome::Empty);

        assert_eq!(controller.session().transcript().len(), 1);
        assert!(!controller.has_pending());
        assert!(controller.run_pending().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_while_busy_is_rejected() {
        let mut controller = BuilderController::new();

        controller.submit("options strategy");
        assert_eq!(controller.submit("no wait, arbitrage"), SubmitOutcome::Busy);

        // The rejected message must not appear anywhere in the transcript.
        let config = controller.run_pending().await.cloned().unwrap();
        assert_eq!(config.strategy, StrategyId::OptionsWheel);
        assert!(controller
            .session()
            .transcript()
            .iter()
            .all(|m| m.text != "no wait, arbitrage"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_accepts_again_after_reveal() {
        let mut controller = BuilderController::new();

        controller.submit("options strategy");
        controller.run_pending().await;

        assert!(controller.submit("now arbitrage").is_scheduled());
    }
}

mod teardown_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reveal_dropped_with_session_never_lands() {
        let mut controller = BuilderController::new();
        controller.submit("momentum trading");

        // Tear the reveal down mid-delay.
        let result =
            tokio::time::timeout(Duration::from_millis(1), controller.run_pending()).await;
        assert!(result.is_err());

        // Dropping the whole controller discards the pending reply; nothing
        // to assert beyond it not panicking.
        drop(controller);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_timing_bounds_the_reveal_delay() {
        let timing = ResponseTiming::from_millis(10, 5);
        let mut controller = BuilderController::with_timing(timing);

        let SubmitOutcome::Scheduled(delay) = controller.submit("anything") else {
            panic!("submission should have been scheduled");
        };

        assert!(delay >= Duration::from_millis(10));
        assert!(delay <= Duration::from_millis(15));

        // With paused time the reveal completes immediately once polled.
        let config = controller.run_pending().await.cloned();
        assert!(config.is_some());
    }
}
