use tracing::{debug, info, info_span, warn, Instrument};

use crate::catalog::CategorySink;
use crate::request::{validate, ImportRequest, SizeLimits, ValidationErrors};
use crate::transport::{ArticleTransport, TransportError};

use super::outcome::{failure_message, success_message, SubmissionOutcome};

/// Result of asking the workflow to start a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; the snapshot must be handed to the transport and
    /// the result fed back through [`ImportWorkflow::complete_submit`].
    Dispatched(ImportRequest),
    /// Validation failed; nothing was sent.
    Invalid(ValidationErrors),
    /// A submission is already in flight; the attempt was dropped.
    Rejected,
}

/// Form state plus the submission state machine.
#[derive(Debug, Clone)]
pub struct ImportWorkflow {
    request: ImportRequest,
    limits: SizeLimits,
    outcome: SubmissionOutcome,
    errors: ValidationErrors,
    success_message: Option<String>,
    error_message: Option<String>,
    last_failure: Option<TransportError>,
}

impl ImportWorkflow {
    pub fn new(limits: SizeLimits) -> Self {
        Self::with_request(ImportRequest::default(), limits)
    }

    pub fn with_request(request: ImportRequest, limits: SizeLimits) -> Self {
        Self {
            request,
            limits,
            outcome: SubmissionOutcome::Idle,
            errors: ValidationErrors::default(),
            success_message: None,
            error_message: None,
            last_failure: None,
        }
    }

    pub fn request(&self) -> &ImportRequest {
        &self.request
    }

    pub fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    pub fn outcome(&self) -> SubmissionOutcome {
        self.outcome
    }

    pub fn is_in_flight(&self) -> bool {
        self.outcome.is_in_flight()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success_message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Detail of the most recent transport failure, kept for diagnostics.
    pub fn last_failure(&self) -> Option<&TransportError> {
        self.last_failure.as_ref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.request.text = text.into();
        self.errors.search_terms = None;
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.request.tag = tag.into();
        self.errors.search_terms = None;
    }

    pub fn set_size(&mut self, size: i64) {
        self.request.size = size;
        self.errors.size = None;
    }

    /// Clears banners, validates, and on success moves to `InFlight` and
    /// returns the request snapshot to send.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.outcome.is_in_flight() {
            debug!("Submission already in flight; ignoring submit");
            return SubmitAttempt::Rejected;
        }

        self.clear_banners();
        self.outcome = SubmissionOutcome::Idle;

        if let Err(errors) = validate(&self.request, &self.limits) {
            debug!(errors = %errors, "Import request failed validation");
            self.errors = errors.clone();
            return SubmitAttempt::Invalid(errors);
        }

        self.errors = ValidationErrors::default();
        self.outcome = SubmissionOutcome::InFlight;
        info!(
            size = self.request.size,
            category = %self.request.category,
            "Submitting import request"
        );
        SubmitAttempt::Dispatched(self.request.clone())
    }

    /// Applies the transport result of the in-flight submission.
    ///
    /// Results arriving while nothing is in flight are discarded.
    pub fn complete_submit(&mut self, result: Result<u64, TransportError>) -> SubmissionOutcome {
        if !self.outcome.is_in_flight() {
            warn!(outcome = %self.outcome, "Discarding submission result with nothing in flight");
            return self.outcome;
        }

        match result {
            Ok(count) => {
                info!(count, "Import succeeded");
                self.outcome = SubmissionOutcome::Succeeded(count);
                self.success_message = Some(success_message(count));
                self.last_failure = None;
            }
            Err(e) => {
                warn!(error = %e, "Import failed");
                self.outcome = SubmissionOutcome::Failed;
                self.error_message = Some(failure_message().to_string());
                self.last_failure = Some(e);
            }
        }
        self.outcome
    }

    /// Runs one complete submission against `transport`.
    pub async fn submit<T>(&mut self, transport: &T) -> SubmissionOutcome
    where
        T: ArticleTransport + ?Sized,
    {
        let snapshot = match self.begin_submit() {
            SubmitAttempt::Dispatched(snapshot) => snapshot,
            SubmitAttempt::Invalid(_) | SubmitAttempt::Rejected => return self.outcome,
        };

        let span = info_span!("import_articles", size = snapshot.size);
        let result = transport.import_articles(&snapshot).instrument(span).await;
        self.complete_submit(result)
    }

    /// Closes the success or error banner and returns to `Idle`.
    ///
    /// Does nothing unless a submission has settled. Returns whether
    /// anything changed.
    pub fn dismiss(&mut self) -> bool {
        if !self.outcome.is_settled() {
            return false;
        }
        self.clear_banners();
        self.outcome = SubmissionOutcome::Idle;
        true
    }

    fn clear_banners(&mut self) {
        self.success_message = None;
        self.error_message = None;
    }
}

impl CategorySink for ImportWorkflow {
    fn set_category(&mut self, value: &str) {
        self.request.set_category(value);
        self.errors.search_terms = None;
    }
}
