//! Resend delivery: renders the contact message into HTML and sends it to
//! the site owner's inbox.

use portfolio_client::net::types::ContactPayload;
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use super::config::ResendSettings;
use super::types::{MailError, MailRelay};

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_message.html");

pub struct ResendRelay {
    resend: Resend,
    from: String,
    to: String,
}

impl ResendRelay {
    #[must_use]
    pub fn new(settings: ResendSettings) -> Self {
        Self { resend: Resend::new(&settings.api_key), from: settings.from, to: settings.to }
    }
}

#[async_trait::async_trait]
impl MailRelay for ResendRelay {
    async fn send(&self, message: &ContactPayload) -> Result<(), MailError> {
        let to = [self.to.as_str()];
        let subject = subject_line(message);
        let html = render_contact_template(message);

        let email = CreateEmailBaseOptions::new(&self.from, to, subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| MailError::ApiRequest(e.to_string()))?;
        Ok(())
    }

    fn provider(&self) -> &'static str {
        "resend"
    }
}

#[must_use]
pub fn subject_line(message: &ContactPayload) -> String {
    format!("Portfolio contact: {} (from {} <{}>)", message.subject, message.name, message.email)
}

/// Fill the HTML template. Visitor input is escaped before insertion.
#[must_use]
pub fn render_contact_template(message: &ContactPayload) -> String {
    CONTACT_TEMPLATE
        .replace("{{NAME}}", &escape_html(&message.name))
        .replace("{{EMAIL}}", &escape_html(&message.email))
        .replace("{{SUBJECT}}", &escape_html(&message.subject))
        .replace("{{MESSAGE}}", &escape_html(&message.message))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "resend_test.rs"]
mod tests;
