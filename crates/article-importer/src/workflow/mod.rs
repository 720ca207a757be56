//! Validated submission workflow.
//!
//! Owns the import request and drives the single in-flight submission:
//! `Idle -> InFlight -> {Succeeded, Failed} -> Idle`.

pub mod outcome;
pub mod submission;

pub use outcome::{failure_message, success_message, SubmissionOutcome};
pub use submission::{ImportWorkflow, SubmitAttempt};
