use std::time::Duration;

use async_trait::async_trait;
use form_spec::OutboundPayload;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::FormBuilderConfig;

/// Errors raised while delivering a payload.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint rejected the form with status {status}")]
    Rejected { status: u16 },
}

/// Outbound side of a submission.
#[async_trait]
pub trait FormSender: Send + Sync {
    async fn send(&self, payload: &OutboundPayload) -> Result<(), SendError>;
}

/// Posts the payload as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpFormSender {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpFormSender {
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, SendError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SendError::Client)?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &FormBuilderConfig) -> Result<Self, SendError> {
        Self::new(config.endpoint.clone(), config.timeout())
    }
}

#[async_trait]
impl FormSender for HttpFormSender {
    async fn send(&self, payload: &OutboundPayload) -> Result<(), SendError> {
        debug!(endpoint = %self.endpoint, fields = payload.form_data.len(), "posting form");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SendError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
