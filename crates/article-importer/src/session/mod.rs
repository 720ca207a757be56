//! Event-driven import session.
//!
//! One session owns the cascade and the workflow and applies events one at a
//! time. The transport call is the only work that runs alongside; its result
//! re-enters the session as another sequential event.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, info_span, Instrument};

use crate::catalog::{CategoryCascade, CategoryTree};
use crate::config::ImporterConfig;
use crate::events::{SubmissionBroadcaster, SubmissionEvent, SubmissionEventKind};
use crate::request::{ImportRequest, SizeLimits};
use crate::transport::{ArticleTransport, TransportError};
use crate::view::FormView;
use crate::workflow::{ImportWorkflow, SubmissionOutcome, SubmitAttempt};

/// A user interaction with the import form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SelectCategory { level: usize, value: String },
    SetText(String),
    SetTag(String),
    SetSize(i64),
    Submit,
    Dismiss,
}

type Settlement = Result<u64, TransportError>;

pub struct ImportSession {
    cascade: CategoryCascade,
    workflow: ImportWorkflow,
    transport: Arc<dyn ArticleTransport>,
    broadcaster: SubmissionBroadcaster,
    settled_tx: mpsc::UnboundedSender<Settlement>,
    settled_rx: mpsc::UnboundedReceiver<Settlement>,
}

impl ImportSession {
    pub fn new(
        tree: Arc<CategoryTree>,
        request: ImportRequest,
        limits: SizeLimits,
        transport: Arc<dyn ArticleTransport>,
    ) -> Self {
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        Self {
            cascade: CategoryCascade::new(tree),
            workflow: ImportWorkflow::with_request(request, limits),
            transport,
            broadcaster: SubmissionBroadcaster::default(),
            settled_tx,
            settled_rx,
        }
    }

    /// Session with the form defaults and size bounds from `config`.
    pub fn from_config(
        config: &ImporterConfig,
        tree: Arc<CategoryTree>,
        transport: Arc<dyn ArticleTransport>,
    ) -> Self {
        Self::new(
            tree,
            ImportRequest::with_size(config.form.default_size),
            config.form.size_limits(),
            transport,
        )
    }

    pub fn cascade(&self) -> &CategoryCascade {
        &self.cascade
    }

    pub fn workflow(&self) -> &ImportWorkflow {
        &self.workflow
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.workflow.outcome()
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<SubmissionEvent> {
        self.broadcaster.subscribe()
    }

    pub fn view(&self) -> FormView {
        FormView::project(&self.cascade, &self.workflow)
    }

    /// Applies one user event. `Submit` spawns the transport call on the
    /// current tokio runtime and returns immediately.
    pub fn handle(&mut self, event: FormEvent) {
        match event {
            FormEvent::SelectCategory { level, value } => {
                self.cascade.select_at(level, value, &mut self.workflow);
            }
            FormEvent::SetText(text) => self.workflow.set_text(text),
            FormEvent::SetTag(tag) => self.workflow.set_tag(tag),
            FormEvent::SetSize(size) => self.workflow.set_size(size),
            FormEvent::Submit => self.submit(),
            FormEvent::Dismiss => {
                if self.workflow.dismiss() {
                    self.broadcaster.send(SubmissionEventKind::Dismissed);
                }
            }
        }
    }

    fn submit(&mut self) {
        match self.workflow.begin_submit() {
            SubmitAttempt::Rejected => {
                self.broadcaster.send(SubmissionEventKind::Rejected);
            }
            SubmitAttempt::Invalid(errors) => {
                let errors = errors
                    .iter()
                    .map(|(key, message)| format!("{}: {}", key, message))
                    .collect();
                self.broadcaster
                    .send(SubmissionEventKind::Invalid { errors });
            }
            SubmitAttempt::Dispatched(snapshot) => {
                self.broadcaster.send(SubmissionEventKind::Started {
                    request: snapshot.clone(),
                });

                let transport = Arc::clone(&self.transport);
                let settled_tx = self.settled_tx.clone();
                let span = info_span!("import_articles", size = snapshot.size);
                tokio::spawn(
                    async move {
                        let result = transport.import_articles(&snapshot).await;
                        // The receiver lives as long as the session
                        let _ = settled_tx.send(result);
                    }
                    .instrument(span),
                );
            }
        }
    }

    fn apply_settlement(&mut self, result: Settlement) -> SubmissionOutcome {
        let event = match &result {
            Ok(count) => SubmissionEventKind::Succeeded { count: *count },
            Err(e) => SubmissionEventKind::Failed {
                error: e.to_string(),
            },
        };
        let outcome = self.workflow.complete_submit(result);
        self.broadcaster.send(event);
        outcome
    }

    /// Waits for the in-flight submission, if any, and applies its result.
    pub async fn settle(&mut self) -> Option<SubmissionOutcome> {
        if !self.workflow.is_in_flight() {
            return None;
        }
        let result = self.settled_rx.recv().await?;
        Some(self.apply_settlement(result))
    }

    /// Drives the session from `events` until the sender closes and no
    /// submission is left in flight.
    pub async fn run(&mut self, mut events: mpsc::Receiver<FormEvent>) -> SubmissionOutcome {
        let mut events_open = true;
        info!("Import session started");

        loop {
            if !events_open && !self.workflow.is_in_flight() {
                break;
            }

            tokio::select! {
                event = events.recv(), if events_open => match event {
                    Some(event) => {
                        debug!(?event, "Handling form event");
                        self.handle(event);
                    }
                    None => events_open = false,
                },
                Some(result) = self.settled_rx.recv(), if self.workflow.is_in_flight() => {
                    self.apply_settlement(result);
                }
            }
        }

        info!(outcome = %self.workflow.outcome(), "Import session finished");
        self.workflow.outcome()
    }
}
