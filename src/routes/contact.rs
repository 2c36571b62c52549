//! Contact relay endpoint.
//!
//! `POST /api/contact` accepts a [`ContactPayload`], re-checks the required
//! fields with the same rules as the browser, and forwards exactly one
//! message to the configured mail relay. No retries, queueing, or rate
//! limiting.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use portfolio_client::net::types::{ContactPayload, ContactResponse};
use portfolio_client::state::contact::ContactForm;
use uuid::Uuid;

use crate::mail::MailError;
use crate::state::AppState;

/// Status returned when the provider call fails.
#[must_use]
pub fn mail_error_to_status(err: &MailError) -> StatusCode {
    if err.is_delivery() { StatusCode::BAD_GATEWAY } else { StatusCode::INTERNAL_SERVER_ERROR }
}

pub async fn send_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> (StatusCode, Json<ContactResponse>) {
    let submission_id = Uuid::new_v4();

    let message = match ContactForm::from(payload).validate() {
        Ok(message) => message,
        Err(e) => {
            tracing::info!(%submission_id, error = %e, "contact submission rejected");
            return (StatusCode::BAD_REQUEST, Json(ContactResponse::error(e.to_string())));
        }
    };

    let Some(mail) = state.mail.as_ref() else {
        tracing::warn!(%submission_id, "contact submission dropped: mail relay not configured");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(ContactResponse::error("mail relay not configured")));
    };

    match mail.send(&message).await {
        Ok(()) => {
            tracing::info!(%submission_id, provider = mail.provider(), "contact message delivered");
            (StatusCode::OK, Json(ContactResponse::ok()))
        }
        Err(e) => {
            tracing::error!(%submission_id, provider = mail.provider(), error = %e, "contact delivery failed");
            (mail_error_to_status(&e), Json(ContactResponse::error("delivery failed")))
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
