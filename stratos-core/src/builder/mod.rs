pub mod classifier;
pub mod scheduler;
pub mod session;

pub use classifier::{Classification, IntentClassifier};
pub use scheduler::{BuilderController, ResponseTiming, SubmitOutcome};
pub use session::{BuilderSession, SessionState, GREETING};
