//! Contact relay transport.
//!
//! Client-side (hydrate): a JSON `POST` to the server relay via `gloo-net`.
//! Server-side (SSR): unavailable, since submissions only originate from a
//! hydrated page.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`DeliveryError`]; the form shows one
//! generic notice regardless of cause, and the detail goes to the console.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use super::types::ContactPayload;

/// Relay endpoint served by the `portfolio` binary.
pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The request never completed (network failure, serialization).
    #[error("request failed: {0}")]
    Request(String),
    /// The relay answered with a non-success status.
    #[error("delivery rejected: status {status}")]
    Rejected { status: u16 },
    /// The relay accepted the request but reported a failure in its body.
    #[error("delivery failed: {0}")]
    Provider(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

/// Sends a validated submission somewhere that turns it into an email.
#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    /// Deliver one submission. Implementations must not retry.
    ///
    /// # Errors
    ///
    /// Returns a [`DeliveryError`] if the message was not accepted.
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), DeliveryError>;
}

/// Transport that posts to [`CONTACT_ENDPOINT`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RelayTransport;

impl ContactTransport for RelayTransport {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
                .json(payload)
                .map_err(|e| DeliveryError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| DeliveryError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(DeliveryError::Rejected { status: resp.status() });
            }
            let body: super::types::ContactResponse =
                resp.json().await.map_err(|e| DeliveryError::Request(e.to_string()))?;
            interpret_response(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            Err(DeliveryError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn interpret_response(body: super::types::ContactResponse) -> Result<(), DeliveryError> {
    if body.ok {
        Ok(())
    } else {
        Err(DeliveryError::Provider(body.error.unwrap_or_else(|| "unknown error".to_owned())))
    }
}
