use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Subject line attached to every relay submission
const SUBJECT: &str = "New message from Movie Mood website";

const SUCCESS_MESSAGE: &str =
    "Your message has been sent successfully! We'll get back to you soon.";
const REJECTION_FALLBACK_MESSAGE: &str = "Something went wrong. Please try again later.";

/// A visitor's contact-form submission
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Relay verdict surfaced to the visitor
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContactOutcome {
    pub success: bool,
    pub message: String,
}

/// Wire response from the form relay
#[derive(Debug, Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Form-relay client abstraction
///
/// A relay-reported rejection is a successful submission with
/// `success = false`; errors cover transport and decode failures only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Submits the form fields to the relay and returns its verdict
    async fn submit(&self, request: &ContactRequest) -> AppResult<ContactOutcome>;
}

/// Web3Forms-compatible relay client
pub struct Web3FormsRelay {
    http_client: HttpClient,
    api_url: String,
    access_key: String,
}

impl Web3FormsRelay {
    pub fn new(api_url: String, access_key: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
            access_key,
        }
    }
}

#[async_trait]
impl ContactRelay for Web3FormsRelay {
    async fn submit(&self, request: &ContactRequest) -> AppResult<ContactOutcome> {
        let url = format!("{}/submit", self.api_url);

        let response = self
            .http_client
            .post(&url)
            .form(&[
                ("access_key", self.access_key.as_str()),
                ("name", request.name.as_str()),
                ("email", request.email.as_str()),
                ("message", request.message.as_str()),
                ("subject", SUBJECT),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Form relay returned status {}: {}",
                status, body
            )));
        }

        let relay: RelayResponse = response.json().await?;

        tracing::info!(
            success = relay.success,
            "Contact form submission relayed"
        );

        let outcome = if relay.success {
            ContactOutcome {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
            }
        } else {
            ContactOutcome {
                success: false,
                message: relay
                    .message
                    .unwrap_or_else(|| REJECTION_FALLBACK_MESSAGE.to_string()),
            }
        };

        Ok(outcome)
    }
}
