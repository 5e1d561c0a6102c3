//! Submission client use case
//!
//! Owns the form state on the visitor's side: runs the client rule set,
//! performs exactly one transport call per valid attempt, and turns the
//! outcome into localized feedback. Retries are always manual.

use crate::ports::inquiry_transport::{InquiryTransport, TransportError};
use inquiry_domain::{ClientMessages, Field, FieldError, FormState, Language};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, warn};

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// A request is in flight; the submit control is disabled
    Sending,
    Succeeded,
    Failed,
}

/// What happened to one submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Client rules failed; nothing was sent
    RejectedLocally(Vec<FieldError>),
    /// A previous attempt is still in flight; nothing was sent
    Busy,
    /// Handler accepted the inquiry; the form was cleared
    Sent { message: String, email_sent: bool },
    /// Handler or network failed; the form keeps the visitor's values
    Failed {
        message: String,
        error: TransportError,
    },
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent { .. })
    }
}

#[derive(Debug, Default)]
struct ClientState {
    form: FormState,
    phase: SubmissionPhase,
    field_errors: Vec<FieldError>,
}

/// Puts the phase back to `Idle` when an attempt is dropped before it settles.
struct InFlight<'a> {
    client: &'a SubmissionClient,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self) {
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        let mut state = self.client.lock();
        if state.phase == SubmissionPhase::Sending {
            debug!("Submit attempt abandoned before the handler answered");
            state.phase = SubmissionPhase::Idle;
        }
    }
}

/// Browser-side submission logic, independent of the UI toolkit
pub struct SubmissionClient {
    transport: Arc<dyn InquiryTransport>,
    language: Language,
    state: Mutex<ClientState>,
}

impl SubmissionClient {
    pub fn new(transport: Arc<dyn InquiryTransport>, language: Language) -> Self {
        Self {
            transport,
            language,
            state: Mutex::new(ClientState::default()),
        }
    }

    /// Start from pre-filled values.
    pub fn with_form(self, form: FormState) -> Self {
        self.lock().form = form;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn lock(&self) -> MutexGuard<'_, ClientState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.lock().form.set(field, value);
    }

    pub fn form(&self) -> FormState {
        self.lock().form.clone()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.lock().phase
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase() != SubmissionPhase::Sending
    }

    /// Field errors from the last attempt, with localized text.
    pub fn field_messages(&self) -> Vec<(Field, String)> {
        self.lock()
            .field_errors
            .iter()
            .map(|e| (e.field, ClientMessages::field_error(e, self.language)))
            .collect()
    }

    /// Run one submit attempt.
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = {
            let mut state = self.lock();
            if state.phase == SubmissionPhase::Sending {
                debug!("Submit ignored: request already in flight");
                return SubmitOutcome::Busy;
            }
            match state.form.validate(self.language) {
                Ok(payload) => {
                    state.field_errors.clear();
                    state.phase = SubmissionPhase::Sending;
                    payload
                }
                Err(errors) => {
                    debug!("Form rejected locally with {} error(s)", errors.len());
                    state.field_errors = errors.clone();
                    return SubmitOutcome::RejectedLocally(errors);
                }
            }
        };

        let in_flight = InFlight {
            client: self,
            settled: false,
        };
        let result = self.transport.submit(&payload).await;
        in_flight.settle();

        let mut state = self.lock();
        match result {
            Ok(ack) => {
                state.form.clear();
                state.phase = SubmissionPhase::Succeeded;
                SubmitOutcome::Sent {
                    message: ClientMessages::success(self.language).to_string(),
                    email_sent: ack.email_sent,
                }
            }
            Err(error) => {
                warn!("Submission failed: {}", error);
                state.phase = SubmissionPhase::Failed;
                let message = match error.reject_reason() {
                    Some(reason) => ClientMessages::reject_reason(reason, self.language),
                    None => ClientMessages::failure(self.language).to_string(),
                };
                SubmitOutcome::Failed { message, error }
            }
        }
    }
}
