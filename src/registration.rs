use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use std::future::Future;

pub const DEFAULT_REGISTRATION_URL: &str = "https://api.joinstepladder.com/users/apprentice";

/// Body of the registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub email: String,
    pub full_name: String,
}

/// Remote endpoint that receives registrations.
pub trait RegistrationClient: Send + Sync + 'static {
    fn register(&self, registration: &Registration) -> impl Future<Output = Result<()>> + Send;
}

pub struct HttpRegistrationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRegistrationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl RegistrationClient for HttpRegistrationClient {
    async fn register(&self, registration: &Registration) -> Result<()> {
        let body = serde_json::to_string(registration).context("Failed to encode registration")?;

        self.client
            .post(&self.endpoint)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .context("Failed to send registration")?
            .error_for_status()
            .context("Registration rejected")?;

        Ok(())
    }
}
