use serde::{Deserialize, Serialize};

/// State of the one submission a workflow may have outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    InFlight,
    Succeeded(u64),
    Failed,
}

impl SubmissionOutcome {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionOutcome::InFlight)
    }

    /// True for the outcomes that show a dismissible banner.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::Succeeded(_) | SubmissionOutcome::Failed
        )
    }
}

impl std::fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionOutcome::Idle => write!(f, "Idle"),
            SubmissionOutcome::InFlight => write!(f, "In flight"),
            SubmissionOutcome::Succeeded(count) => write!(f, "Succeeded ({})", count),
            SubmissionOutcome::Failed => write!(f, "Failed"),
        }
    }
}

pub fn success_message(count: u64) -> String {
    format!("Successfully imported {} articles!", count)
}

pub fn failure_message() -> &'static str {
    "Failed to import articles."
}
