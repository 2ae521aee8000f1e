//! Outbound email notification
//!
//! Contact form submissions trigger a best-effort notification to the
//! site mailbox through the Brevo transactional email API. Delivery
//! failure never fails the originating request; callers log and move on.

use crate::config::NotifyConfig;
use async_trait::async_trait;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email notification is not configured")]
    NotConfigured,
    #[error("email API request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("email API returned status {0}")]
    Api(reqwest::StatusCode),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    /// Notify the site mailbox about a new contact form submission.
    async fn notify_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), NotifyError>;
}

/// Brevo v3 transactional email client
pub struct BrevoNotifier {
    config: NotifyConfig,
    client: reqwest::Client,
}

impl BrevoNotifier {
    pub fn new(config: NotifyConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContactNotifier for BrevoNotifier {
    async fn notify_contact(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), NotifyError> {
        let (Some(api_key), Some(mailbox)) = (&self.config.api_key, &self.config.mailbox) else {
            return Err(NotifyError::NotConfigured);
        };

        let body = json!({
            "sender": { "name": "FastSewa", "email": mailbox },
            "to": [{ "email": mailbox }],
            "subject": "New Contact Form - FastSewa Website",
            "htmlContent": format!(
                "<h3>New contact message</h3>\
                 <p><b>Name:</b> {name}</p>\
                 <p><b>Email:</b> {email}</p>\
                 <p><b>Message:</b></p><p>{message}</p>"
            ),
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .header("api-key", api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NotifyError::Api(response.status()));
        }

        Ok(())
    }
}
