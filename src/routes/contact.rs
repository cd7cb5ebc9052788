use axum::{
    extract::{Form, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use folio_contact::{ContactForm, Field, Submission, SubmitFormInput};
use ulid::Ulid;

use crate::{
    routes::{AppState, index::IndexTemplate},
    template::Template,
};

/// Request header asking for the form fragment instead of the whole page.
pub const FRAGMENT_HEADER: &str = "x-fragment";
pub const CONTACT_FRAGMENT: &str = "contact-form";

/// Response header telling the client script to leave the form untouched.
pub const SWAP_HEADER: &str = "ts-swap";

/// What the contact form partial needs to render one form instance.
#[derive(Debug, Clone)]
pub struct ContactView {
    pub form: ContactForm,
    pub form_id: String,
    pub invalid: Vec<Field>,
}

impl ContactView {
    pub fn fresh() -> Self {
        Self {
            form: ContactForm::new(),
            form_id: Ulid::new().to_string(),
            invalid: vec![],
        }
    }

    pub fn is_invalid(&self, field: &str) -> bool {
        self.invalid.iter().any(|f| f.as_ref() == field)
    }
}

#[derive(askama::Template)]
#[template(path = "partials/contact-form.html")]
pub struct ContactFormTemplate<'a> {
    pub contact: &'a ContactView,
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    headers: HeaderMap,
    Form(mut input): Form<SubmitFormInput>,
) -> impl IntoResponse {
    if input.form_id.is_empty() {
        input.form_id = Ulid::new().to_string();
    }

    let form_id = input.form_id.to_owned();

    let (status, view) = match app_state.contact_command.submit_form(input).await {
        Submission::Completed(form) => (
            StatusCode::OK,
            ContactView {
                form,
                form_id,
                invalid: vec![],
            },
        ),
        Submission::Invalid { form, fields } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactView {
                form,
                form_id,
                invalid: fields,
            },
        ),
        Submission::Ignored => {
            return (StatusCode::NO_CONTENT, [(SWAP_HEADER, "skip")]).into_response();
        }
    };

    if wants_fragment(&headers) {
        return template.render_with_status(status, ContactFormTemplate { contact: &view });
    }

    render_page(&template, status, view)
}

fn render_page(template: &Template, status: StatusCode, view: ContactView) -> Response {
    template.render_with_status(status, IndexTemplate::new(template.portfolio(), view))
}

fn wants_fragment(headers: &HeaderMap) -> bool {
    headers
        .get(FRAGMENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == CONTACT_FRAGMENT)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn fragment_header_must_name_the_contact_form() {
        let mut headers = HeaderMap::new();
        assert!(!wants_fragment(&headers));

        headers.insert(FRAGMENT_HEADER, HeaderValue::from_static("other"));
        assert!(!wants_fragment(&headers));

        headers.insert(FRAGMENT_HEADER, HeaderValue::from_static(CONTACT_FRAGMENT));
        assert!(wants_fragment(&headers));
    }

    #[test]
    fn fragment_leaves_the_button_to_the_page_script() {
        let mut view = ContactView::fresh();
        view.form.begin_submit();

        let html = askama::Template::render(&ContactFormTemplate { contact: &view }).unwrap();

        assert!(!html.contains("disabled"));
        assert!(html.contains(r#"data-submitting-label="Sending...""#));
    }

    #[test]
    fn fresh_views_get_distinct_form_ids() {
        let a = ContactView::fresh();
        let b = ContactView::fresh();

        assert_ne!(a.form_id, b.form_id);
        assert!(a.form.state().is_empty());
        assert!(!a.is_invalid("email"));
    }
}
