//! EmailJS REST client.
//!
//! Thin wrapper over `POST /api/v1.0/email/send`. The request body is built
//! by the pure [`build_request`] so its shape can be tested without the
//! network.

use std::time::Duration;

use portfolio_client::net::types::ContactPayload;

use super::config::{EmailJsSettings, MailTimeouts};
use super::types::{MailError, MailRelay};

// =============================================================================
// CLIENT
// =============================================================================

pub struct EmailJsRelay {
    http: reqwest::Client,
    settings: EmailJsSettings,
}

impl EmailJsRelay {
    /// # Errors
    ///
    /// Returns [`MailError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(settings: EmailJsSettings, timeouts: MailTimeouts) -> Result<Self, MailError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| MailError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, settings })
    }
}

#[async_trait::async_trait]
impl MailRelay for EmailJsRelay {
    async fn send(&self, message: &ContactPayload) -> Result<(), MailError> {
        let body = build_request(&self.settings, message);

        let response = self
            .http
            .post(&self.settings.api_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let text = response
            .text()
            .await
            .map_err(|e| MailError::ApiRequest(e.to_string()))?;
        Err(MailError::ApiResponse { status, body: text })
    }

    fn provider(&self) -> &'static str {
        "emailjs"
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, serde::Serialize)]
pub(crate) struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

/// Variables referenced by the EmailJS template.
#[derive(Debug, serde::Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
}

pub(crate) fn build_request<'a>(settings: &'a EmailJsSettings, message: &'a ContactPayload) -> SendRequest<'a> {
    SendRequest {
        service_id: &settings.service_id,
        template_id: &settings.template_id,
        user_id: &settings.public_key,
        access_token: settings.private_key.as_deref(),
        template_params: TemplateParams {
            name: &message.name,
            email: &message.email,
            subject: &message.subject,
            message: &message.message,
        },
    }
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;
