//! Contact form state, validation, and the submit flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ContactSection` keeps a `ContactForm` in a signal. On submit it calls
//! [`ContactForm::validate`] synchronously, hands the payload to a
//! [`ContactTransport`], and folds the result back with [`settle`]. The
//! server re-runs the same validation before relaying the message.
//!
//! ERROR HANDLING
//! ==============
//! Two failure classes reach the user: a missing required field (no network
//! call is made) and a rejected delivery (the entered values are kept so
//! the visitor can resend).

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::fmt;

use crate::net::contact::{ContactTransport, DeliveryError};
use crate::net::types::ContactPayload;
use crate::state::toast::{Notice, ToastVariant};

/// Subject sent when the visitor leaves the field blank.
pub const DEFAULT_SUBJECT: &str = "No subject";

/// Form inputs, addressed by their `name` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Resolve an input's `name` attribute.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "subject" => Some(Self::Subject),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Whether submission is refused while this field is blank.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Subject)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Presence validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(ContactField),
}

/// The four text inputs of the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.subject.is_empty() && self.message.is_empty()
    }

    /// Check required fields and build the outbound payload.
    ///
    /// Only an empty value counts as missing; whitespace is sent as typed.
    /// An empty subject becomes [`DEFAULT_SUBJECT`].
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::MissingField`] naming the first blank
    /// empty required field in form order.
    pub fn validate(&self) -> Result<ContactPayload, ContactError> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.get(field).is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        let subject = if self.subject.is_empty() { DEFAULT_SUBJECT.to_owned() } else { self.subject.clone() };
        Ok(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject,
            message: self.message.clone(),
        })
    }
}

impl From<ContactPayload> for ContactForm {
    fn from(payload: ContactPayload) -> Self {
        Self { name: payload.name, email: payload.email, subject: payload.subject, message: payload.message }
    }
}

/// Result of one press of the send button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was blank; nothing was sent.
    Invalid(ContactError),
    /// The relay accepted the message; the form was cleared.
    Sent,
    /// The relay or provider rejected the message; the form is unchanged.
    Failed(DeliveryError),
}

impl SubmitOutcome {
    /// Notification shown for this outcome.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::Invalid(_) => Notice {
                title: "Please fill in all required fields",
                description: None,
                variant: ToastVariant::Destructive,
            },
            Self::Sent => Notice {
                title: "Message sent successfully!",
                description: Some("I'll get back to you within 24 hours."),
                variant: ToastVariant::Default,
            },
            Self::Failed(_) => Notice {
                title: "Failed to send message",
                description: Some("Something went wrong. Please try again later."),
                variant: ToastVariant::Destructive,
            },
        }
    }
}

/// Fold a delivery result back into the form.
pub fn settle(form: &mut ContactForm, result: Result<(), DeliveryError>) -> SubmitOutcome {
    match result {
        Ok(()) => {
            form.clear();
            SubmitOutcome::Sent
        }
        Err(err) => SubmitOutcome::Failed(err),
    }
}

/// Validate, deliver once, and settle.
///
/// Concurrent submissions are not de-duplicated: every call that passes
/// validation issues exactly one `deliver`.
pub async fn submit<T>(form: &mut ContactForm, transport: &T) -> SubmitOutcome
where
    T: ContactTransport + ?Sized,
{
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(err) => return SubmitOutcome::Invalid(err),
    };
    let result = transport.deliver(&payload).await;
    settle(form, result)
}
