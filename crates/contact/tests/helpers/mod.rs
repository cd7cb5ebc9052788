use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio_contact::{DeliveryError, FormState, SubmitFormInput, Transport};
use tokio::sync::{Notify, Semaphore};

#[allow(dead_code)]
pub enum Reply {
    Accept,
    Status(u16),
    Unreachable,
}

/// Answers every delivery with the same reply and keeps the payloads.
pub struct RecordingTransport {
    reply: Reply,
    calls: Mutex<Vec<FormState>>,
}

impl RecordingTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<FormState> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn deliver(&self, message: &FormState) -> Result<(), DeliveryError> {
        self.calls.lock().unwrap().push(message.clone());

        match self.reply {
            Reply::Accept => Ok(()),
            Reply::Status(status) => Err(DeliveryError::Rejected { status }),
            Reply::Unreachable => Err(DeliveryError::Unreachable(
                "connection refused".to_owned(),
            )),
        }
    }
}

/// Holds every delivery until the test opens the gate.
#[allow(dead_code)]
pub struct GatedTransport {
    pub entered: Notify,
    pub gate: Semaphore,
    pub calls: AtomicUsize,
}

impl Default for GatedTransport {
    fn default() -> Self {
        Self {
            entered: Notify::new(),
            gate: Semaphore::new(0),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn deliver(&self, _message: &FormState) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();

        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| DeliveryError::Unreachable(e.to_string()))?;
        permit.forget();

        Ok(())
    }
}

#[allow(dead_code)]
pub fn jane(form_id: &str) -> SubmitFormInput {
    SubmitFormInput {
        form_id: form_id.to_owned(),
        name: "Jane".to_owned(),
        email: "jane@example.com".to_owned(),
        message: "Hello".to_owned(),
    }
}
