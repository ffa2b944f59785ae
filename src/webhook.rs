//! Outbound webhook collaborator.
//!
//! Forwards generated orders to the integrator-supplied URL so browser
//! clients never hit cross-origin restrictions. Targets are checked before
//! any network call; each request is bounded by its own timeout.

use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::{Client, Url};
use thiserror::Error;

use crate::error::AppError;
use crate::models::order::Order;

const USER_AGENT_VALUE: &str = "AV-Integration-Toolkit/1.0";

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Failed to reach endpoint: {0}")]
    Transport(String),
}

/// Raw reply from the integrator endpoint. A non-2xx status is not an
/// error; the validator records it alongside the body.
#[derive(Debug, Clone)]
pub struct WebhookReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

#[derive(Clone)]
pub struct WebhookClient {
    http: Client,
    timeout: Duration,
}

impl WebhookClient {
    pub fn new(timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            timeout,
        }
    }

    /// Parse and screen a caller-supplied webhook URL. Only plain HTTP(S)
    /// targets are allowed.
    pub fn parse_target(raw: &str) -> Result<Url, AppError> {
        let url = Url::parse(raw)
            .map_err(|_| AppError::BadRequest("Invalid webhook URL format".to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(AppError::BadRequest(
                "Only HTTP and HTTPS URLs are supported".to_string(),
            )),
        }
    }

    /// POST one serialized order to the target and return the raw reply.
    pub async fn post_order(&self, target: &Url, order: &Order) -> Result<WebhookReply, WebhookError> {
        let response = self
            .http
            .post(target.clone())
            .header(USER_AGENT, USER_AGENT_VALUE)
            .timeout(self.timeout)
            .json(order)
            .send()
            .await
            .map_err(|err| self.classify(err))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.classify(err))?;

        Ok(WebhookReply {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }

    fn classify(&self, err: reqwest::Error) -> WebhookError {
        if err.is_timeout() {
            WebhookError::Timeout(self.timeout.as_secs())
        } else {
            WebhookError::Transport(err.to_string())
        }
    }
}
