use crate::{DeliveryError, Field, FormState, Phase, SubmissionStatus, Transport};

/// Controller of one contact form instance.
///
/// The transitions are plain methods so a rendering layer can drive them
/// directly: [`ContactForm::begin_submit`] and [`ContactForm::complete`]
/// bracket the outbound request, and [`ContactForm::submit`] runs both around
/// a [`Transport`].
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    state: FormState,
    status: SubmissionStatus,
    submitting: bool,
}

impl ContactForm {
    pub const SUBMIT_LABEL: &'static str = "Send Message";
    pub const SUBMITTING_LABEL: &'static str = "Sending...";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn phase(&self) -> Phase {
        if self.submitting {
            return Phase::Submitting;
        }

        match self.status {
            SubmissionStatus::Idle => Phase::Idle,
            SubmissionStatus::Success => Phase::Success,
            SubmissionStatus::Error => Phase::Error,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            Self::SUBMITTING_LABEL
        } else {
            Self::SUBMIT_LABEL
        }
    }

    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.state.set(field, value);
    }

    /// Enters `Submitting` and returns the payload to deliver, or `None` when
    /// a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<FormState> {
        if self.submitting {
            return None;
        }

        self.submitting = true;
        self.status = SubmissionStatus::Idle;

        Some(self.state.clone())
    }

    /// Applies the outcome of the request started by `begin_submit`.
    pub fn complete(&mut self, outcome: Result<(), DeliveryError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.state = FormState::default();
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact form submission failed");
                self.status = SubmissionStatus::Error;
            }
        }

        self.submitting = false;
    }

    /// Issues exactly one delivery through `transport`. Returns `false`
    /// without touching the transport when already submitting.
    pub async fn submit<T: Transport + ?Sized>(&mut self, transport: &T) -> bool {
        let Some(payload) = self.begin_submit() else {
            return false;
        };

        let outcome = transport.deliver(&payload).await;
        self.complete(outcome);

        true
    }
}

impl From<FormState> for ContactForm {
    fn from(state: FormState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }
}
