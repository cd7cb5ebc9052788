use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// One of the three inputs of the contact form, named after the input's
/// `name` attribute.
#[derive(
    EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Outcome of the most recent submission.
#[derive(EnumString, Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl SubmissionStatus {
    pub const SUCCESS_MESSAGE: &'static str =
        "Message sent successfully! I'll get back to you soon.";
    pub const ERROR_MESSAGE: &'static str =
        "Failed to send message. Please try again or contact me directly.";

    /// Text shown under the form, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success => Some(Self::SUCCESS_MESSAGE),
            SubmissionStatus::Error => Some(Self::ERROR_MESSAGE),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmissionStatus::Error)
    }
}

/// Observable state of the form as a whole.
#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Error,
}

/// The text a visitor typed. Serialized as-is for the contact endpoint.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}
