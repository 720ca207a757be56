//! Submission event broadcasting for observers of an import session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

use crate::request::ImportRequest;

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmissionEventKind {
    /// A validated request was handed to the transport.
    Started { request: ImportRequest },
    /// A submit arrived while another was in flight and was dropped.
    Rejected,
    /// Validation failed locally; nothing was sent.
    Invalid { errors: Vec<String> },
    Succeeded { count: u64 },
    /// Carries the transport detail the user-facing banner omits.
    Failed { error: String },
    Dismissed,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: SubmissionEventKind,
}

impl SubmissionEvent {
    pub fn new(kind: SubmissionEventKind) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
        }
    }
}

#[derive(Clone)]
pub struct SubmissionBroadcaster {
    sender: broadcast::Sender<SubmissionEvent>,
}

impl SubmissionBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn send(&self, kind: SubmissionEventKind) {
        // No active receivers is fine
        let _ = self.sender.send(SubmissionEvent::new(kind));
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SubmissionEvent> {
        self.sender.subscribe()
    }
}

impl Default for SubmissionBroadcaster {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcaster_send_receive() {
        let broadcaster = SubmissionBroadcaster::new(10);
        let mut receiver = broadcaster.subscribe();

        broadcaster.send(SubmissionEventKind::Succeeded { count: 3 });

        let event = receiver.try_recv().unwrap();
        assert_eq!(event.kind, SubmissionEventKind::Succeeded { count: 3 });
    }

    #[test]
    fn test_send_without_receivers() {
        let broadcaster = SubmissionBroadcaster::default();
        broadcaster.send(SubmissionEventKind::Dismissed);
    }

    #[test]
    fn test_event_serialization() {
        let event = SubmissionEvent::new(SubmissionEventKind::Failed {
            error: "Import endpoint returned 502: bad gateway".to_string(),
        });
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "failed");
        assert_eq!(json["error"], "Import endpoint returned 502: bad gateway");
        assert!(json["timestamp"].is_string());
    }
}
