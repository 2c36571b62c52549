//! Mail relay types: the provider-neutral trait and its errors.

use portfolio_client::net::types::ContactPayload;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by mail relay operations.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A required environment variable is not set.
    #[error("missing setting: env var {var} not set")]
    MissingSetting { var: String },

    /// The HTTP request to the provider failed before a response arrived.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl MailError {
    /// Whether the error comes from the provider side of the call rather
    /// than from local configuration.
    #[must_use]
    pub fn is_delivery(&self) -> bool {
        matches!(self, Self::ApiRequest(_) | Self::ApiResponse { .. })
    }
}

// =============================================================================
// RELAY TRAIT
// =============================================================================

/// Forwards one contact submission to a transactional-email provider.
///
/// Object-safe so `AppState` can hold `Arc<dyn MailRelay>` and tests can
/// swap in a recording mock.
#[async_trait::async_trait]
pub trait MailRelay: Send + Sync {
    /// Deliver `message`. Called exactly once per accepted submission.
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] if the provider call fails or is rejected.
    async fn send(&self, message: &ContactPayload) -> Result<(), MailError>;

    /// Short provider name for logs (`"emailjs"`, `"resend"`).
    fn provider(&self) -> &'static str;
}
