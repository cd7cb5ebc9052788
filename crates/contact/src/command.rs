use std::{str::FromStr, sync::Arc};

use serde::Deserialize;
use strum::VariantArray;
use validator::Validate;

use crate::{ContactForm, Field, FormState, InFlight, Transport};

/// A posted contact form. Mirrors the constraints the browser enforces on
/// the inputs (`required`, `type="email"`).
#[derive(Deserialize, Validate, Default, Clone, Debug)]
pub struct SubmitFormInput {
    #[serde(default)]
    pub form_id: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(email)]
    #[serde(default)]
    pub email: String,
    #[validate(length(min = 1))]
    #[serde(default)]
    pub message: String,
}

impl SubmitFormInput {
    pub fn form_state(&self) -> FormState {
        FormState::new(&self.name, &self.email, &self.message)
    }

    /// Fields breaking the input constraints, in form order.
    pub fn invalid_fields(&self) -> Vec<Field> {
        let Err(errors) = self.validate() else {
            return vec![];
        };

        let names = errors.field_errors();
        Field::VARIANTS
            .iter()
            .copied()
            .filter(|field| {
                names
                    .keys()
                    .any(|name| Field::from_str(name).ok() == Some(*field))
            })
            .collect()
    }
}

#[derive(Debug)]
pub enum Submission {
    /// One request was issued; the form carries its outcome.
    Completed(ContactForm),
    /// Constraints failed, nothing was sent.
    Invalid {
        form: ContactForm,
        fields: Vec<Field>,
    },
    /// The same form instance already has a request in flight.
    Ignored,
}

#[derive(Clone)]
pub struct Command {
    transport: Arc<dyn Transport>,
    in_flight: InFlight,
}

impl Command {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            in_flight: InFlight::new(),
        }
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    pub async fn submit_form(&self, input: SubmitFormInput) -> Submission {
        let mut form = ContactForm::from(input.form_state());

        let fields = input.invalid_fields();
        if !fields.is_empty() {
            return Submission::Invalid { form, fields };
        }

        let Some(_guard) = self.in_flight.try_acquire(&input.form_id) else {
            tracing::debug!(form_id = %input.form_id, "submission already in flight");
            return Submission::Ignored;
        };

        form.submit(self.transport.as_ref()).await;

        Submission::Completed(form)
    }
}
