use std::time::Duration;

use crate::config::Config;
use crate::observability::metrics::Metrics;
use crate::webhook::WebhookClient;

pub struct AppState {
    pub webhook: WebhookClient,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            webhook: WebhookClient::new(Duration::from_secs(config.webhook_timeout_secs)),
            metrics: Metrics::new(),
        }
    }
}
