//! Mail: relay for contact-form submissions.
//!
//! DESIGN
//! ======
//! Provider credentials live only in server configuration; the browser
//! posts to `/api/contact` and never sees them. The `MailClient` enum
//! dispatches to EmailJS or Resend based on `MAIL_PROVIDER`.

pub mod config;
pub mod emailjs;
pub mod resend;
pub mod types;

use config::{MailConfig, ProviderSettings};
use portfolio_client::net::types::ContactPayload;
pub use types::{MailError, MailRelay};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete relay that dispatches to the configured provider.
pub struct MailClient {
    inner: MailProvider,
}

enum MailProvider {
    EmailJs(emailjs::EmailJsRelay),
    Resend(resend::ResendRelay),
}

impl MailClient {
    /// Build a relay from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required settings are missing or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, MailError> {
        let config = MailConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build a relay from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: MailConfig) -> Result<Self, MailError> {
        let inner = match config.provider {
            ProviderSettings::EmailJs(settings) => {
                MailProvider::EmailJs(emailjs::EmailJsRelay::new(settings, config.timeouts)?)
            }
            ProviderSettings::Resend(settings) => MailProvider::Resend(resend::ResendRelay::new(settings)),
        };
        Ok(Self { inner })
    }
}

#[async_trait::async_trait]
impl MailRelay for MailClient {
    async fn send(&self, message: &ContactPayload) -> Result<(), MailError> {
        match &self.inner {
            MailProvider::EmailJs(r) => r.send(message).await,
            MailProvider::Resend(r) => r.send(message).await,
        }
    }

    fn provider(&self) -> &'static str {
        match &self.inner {
            MailProvider::EmailJs(r) => r.provider(),
            MailProvider::Resend(r) => r.provider(),
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
