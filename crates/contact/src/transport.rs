use async_trait::async_trait;

use crate::FormState;

/// Why a message did not reach the contact endpoint. Only logged; visitors
/// see a single generic failure.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("contact endpoint answered with status {status}")]
    Rejected { status: u16 },

    #[error("contact endpoint unreachable: {0}")]
    Unreachable(String),
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, message: &FormState) -> Result<(), DeliveryError>;
}

/// Posts the form as JSON to the external contact-handling endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn deliver(&self, message: &FormState) -> Result<(), DeliveryError> {
        // `json` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(|e| DeliveryError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::info!(endpoint = %self.endpoint, "contact message delivered");

        Ok(())
    }
}
