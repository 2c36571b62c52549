//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! site itself is stateless; the only shared resource is the optional mail
//! relay.

use std::sync::Arc;

use crate::mail::MailRelay;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Optional mail relay. `None` if mail env vars are not configured.
    pub mail: Option<Arc<dyn MailRelay>>,
}

impl AppState {
    #[must_use]
    pub fn new(mail: Option<Arc<dyn MailRelay>>) -> Self {
        Self { mail }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use portfolio_client::net::types::ContactPayload;

    use super::*;
    use crate::mail::MailError;

    /// Mail relay that records every message and answers with a fixed
    /// outcome.
    pub struct RecordingRelay {
        pub sent: Mutex<Vec<ContactPayload>>,
        fail_status: Option<u16>,
    }

    impl RecordingRelay {
        #[must_use]
        pub fn accepting() -> Arc<Self> {
            Arc::new(Self { sent: Mutex::new(Vec::new()), fail_status: None })
        }

        /// Relay whose provider rejects every message with `status`.
        #[must_use]
        pub fn rejecting(status: u16) -> Arc<Self> {
            Arc::new(Self { sent: Mutex::new(Vec::new()), fail_status: Some(status) })
        }

        #[must_use]
        pub fn sent(&self) -> Vec<ContactPayload> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl MailRelay for RecordingRelay {
        async fn send(&self, message: &ContactPayload) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(message.clone());
            match self.fail_status {
                Some(status) => Err(MailError::ApiResponse { status, body: "rejected".into() }),
                None => Ok(()),
            }
        }

        fn provider(&self) -> &'static str {
            "recording"
        }
    }

    /// `AppState` with no mail relay configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None)
    }

    /// `AppState` backed by `relay`.
    #[must_use]
    pub fn test_app_state_with_mail(relay: Arc<RecordingRelay>) -> AppState {
        AppState::new(Some(relay))
    }
}
