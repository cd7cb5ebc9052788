#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use folio::AppState;
use folio_contact::{DeliveryError, FormState, Transport};
use folio_content::Portfolio;
use http_body_util::BodyExt;

/// Transport answering every delivery the same way, remembering what it got.
#[derive(Default)]
pub struct FakeTransport {
    failing: AtomicBool,
    calls: Mutex<Vec<FormState>>,
}

impl FakeTransport {
    pub fn accepting() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let transport = Self::default();
        transport.set_failing(true);
        Arc::new(transport)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<FormState> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    async fn deliver(&self, message: &FormState) -> Result<(), DeliveryError> {
        self.calls.lock().unwrap().push(message.clone());

        if self.failing.load(Ordering::SeqCst) {
            return Err(DeliveryError::Rejected { status: 500 });
        }

        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub transport: Arc<FakeTransport>,
}

pub fn create_test_app(transport: Arc<FakeTransport>) -> TestApp {
    create_test_app_with_resume(transport, PathBuf::from("does/not/exist/resume.pdf"))
}

pub fn create_test_app_with_resume(
    transport: Arc<FakeTransport>,
    resume_path: PathBuf,
) -> TestApp {
    let portfolio = Portfolio::load(None).unwrap();

    let state = AppState {
        portfolio: Arc::new(portfolio),
        contact_command: folio_contact::Command::new(transport.clone()),
        resume_path,
    };

    TestApp {
        router: folio::create_app(state.clone()),
        state,
        transport,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// POST /contact as the page script sends it: asking for the fragment only.
pub fn post_fragment(form: &[(&str, &str)]) -> Request<Body> {
    contact_request(form, true)
}

/// POST /contact as a plain browser form submission.
pub fn post_page(form: &[(&str, &str)]) -> Request<Body> {
    contact_request(form, false)
}

fn contact_request(form: &[(&str, &str)], fragment: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");

    if fragment {
        builder = builder.header("x-fragment", "contact-form");
    }

    builder
        .body(Body::from(serde_urlencoded::to_string(form).unwrap()))
        .unwrap()
}

pub fn jane(form_id: &str) -> Vec<(&str, &str)> {
    vec![
        ("form_id", form_id),
        ("name", "Jane"),
        ("email", "jane@example.com"),
        ("message", "Hello there"),
    ]
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
