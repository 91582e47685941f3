//! Simulated response latency and the session controller.
//!
//! The classifier is synchronous; what the user experiences as "thinking" is
//! a scheduled reveal. `BuilderController` owns the session, classifies at
//! submit time, and holds the pending reply until the delay elapses. The
//! reveal runs as a future borrowed from the controller, so tearing down the
//! session drops the reveal with it; nothing ever completes against a
//! disposed session.

use std::time::Duration;

use tracing::debug;

use crate::config::BuilderConfig;
use crate::models::AgentConfiguration;

use super::classifier::{Classification, IntentClassifier};
use super::session::BuilderSession;

/// Delay parameters for the scheduled reveal.
///
/// The delay is `base` plus a clock-derived fraction of `jitter`, so it is
/// always in `[base, base + jitter]` and always positive.
#[derive(Debug, Clone, Copy)]
pub struct ResponseTiming {
    base: Duration,
    jitter: Duration,
}

impl Default for ResponseTiming {
    fn default() -> Self {
        Self {
            base: Duration::from_millis(1500),
            jitter: Duration::from_millis(1000),
        }
    }
}

impl ResponseTiming {
    pub fn from_millis(base_ms: u64, jitter_ms: u64) -> Self {
        Self {
            // The state machine relies on the reveal being deferred, so the
            // base is floored at one millisecond.
            base: Duration::from_millis(base_ms.max(1)),
            jitter: Duration::from_millis(jitter_ms),
        }
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::from_millis(config.response_base_delay_ms, config.response_jitter_ms)
    }

    pub fn base(&self) -> Duration {
        self.base
    }

    pub fn max_delay(&self) -> Duration {
        self.base + self.jitter
    }

    /// Draw one delay sample.
    pub fn delay(&self) -> Duration {
        let jitter_ms = (self.jitter.as_millis() as f64 * clock_fraction()) as u64;
        self.base + Duration::from_millis(jitter_ms)
    }
}

/// Cheap jitter source derived from the system clock.
/// Returns a value in [0.0, 1.0).
fn clock_fraction() -> f64 {
    use std::time::SystemTime;
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .subsec_nanos();
    (nanos % 1000) as f64 / 1000.0
}

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Accepted: user message and placeholder appended, reveal due after
    /// the contained delay.
    Scheduled(Duration),
    /// Empty or whitespace-only input; rejected silently, transcript
    /// untouched.
    Empty,
    /// A reply is already in flight; rejected, transcript untouched.
    Busy,
}

impl SubmitOutcome {
    pub fn is_scheduled(&self) -> bool {
        matches!(self, SubmitOutcome::Scheduled(_))
    }
}

#[derive(Debug, Clone)]
struct PendingReply {
    classification: Classification,
    due_in: Duration,
}

/// Owns one builder session and drives the submit/reveal cycle.
///
/// At most one reply is in flight at a time: while the session is
/// `AwaitingResponse`, further submissions return [`SubmitOutcome::Busy`].
/// That state flag is the only concurrency control the flow needs.
#[derive(Debug)]
pub struct BuilderController {
    session: BuilderSession,
    classifier: IntentClassifier,
    timing: ResponseTiming,
    pending: Option<PendingReply>,
}

impl Default for BuilderController {
    fn default() -> Self {
        Self::new()
    }
}

impl BuilderController {
    pub fn new() -> Self {
        Self::with_timing(ResponseTiming::default())
    }

    pub fn with_timing(timing: ResponseTiming) -> Self {
        Self {
            session: BuilderSession::new(),
            classifier: IntentClassifier::new(),
            timing,
            pending: None,
        }
    }

    pub fn session(&self) -> &BuilderSession {
        &self.session
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit one user message.
    ///
    /// On acceptance the user message and a typing placeholder are appended
    /// synchronously, the message is classified, and the reveal is scheduled.
    pub fn submit(&mut self, input: &str) -> SubmitOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.session.is_awaiting_response() {
            debug!(session_id = %self.session.id, "submission ignored: reply in flight");
            return SubmitOutcome::Busy;
        }

        let classification = self.classifier.classify(trimmed);
        self.session.begin_exchange(trimmed);

        let due_in = self.timing.delay();
        debug!(
            session_id = %self.session.id,
            strategy = %classification.configuration.strategy,
            delay_ms = due_in.as_millis() as u64,
            "reply scheduled"
        );
        self.pending = Some(PendingReply {
            classification,
            due_in,
        });

        SubmitOutcome::Scheduled(due_in)
    }

    /// Wait out the scheduled delay, then reveal the pending reply.
    ///
    /// Returns the new live configuration, or `None` when nothing is
    /// pending. Dropping the returned future before it completes leaves the
    /// session exactly as it was: placeholder in place, reply still pending.
    pub async fn run_pending(&mut self) -> Option<&AgentConfiguration> {
        let due_in = self.pending.as_ref()?.due_in;
        tokio::time::sleep(due_in).await;
        self.complete_pending()
    }

    /// Apply the pending reply immediately: swap the placeholder for the
    /// final assistant message and replace the configuration.
    pub fn complete_pending(&mut self) -> Option<&AgentConfiguration> {
        let pending = self.pending.take()?;

        self.session
            .resolve_placeholder(&pending.classification.response_text);
        self.session
            .replace_configuration(pending.classification.configuration);

        debug!(
            session_id = %self.session.id,
            strategy = %self.session.configuration().strategy,
            confidence = self.session.configuration().confidence,
            "reply revealed"
        );
        Some(self.session.configuration())
    }
}
