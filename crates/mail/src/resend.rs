use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{EmailMessage, MailError, Notifier};

pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ResendMailer {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.resend.com".to_string()),
        }
    }
}

#[async_trait]
impl Notifier for ResendMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), MailError> {
        let url = format!("{}/emails", self.base_url);

        debug!(to = %message.to, subject = %message.subject, "dispatching email");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(message)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), body = %text, "email API error");
            return Err(MailError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        debug!(to = %message.to, "email accepted by provider");
        Ok(())
    }
}
