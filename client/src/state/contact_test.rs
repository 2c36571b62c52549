use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

// =============================================================
// MockTransport
// =============================================================

struct MockTransport {
    fail_with: Option<DeliveryError>,
    calls: Cell<usize>,
    payloads: RefCell<Vec<ContactPayload>>,
}

impl MockTransport {
    fn accepting() -> Self {
        Self { fail_with: None, calls: Cell::new(0), payloads: RefCell::new(Vec::new()) }
    }

    fn rejecting(err: DeliveryError) -> Self {
        Self { fail_with: Some(err), ..Self::accepting() }
    }
}

impl ContactTransport for MockTransport {
    async fn deliver(&self, payload: &ContactPayload) -> Result<(), DeliveryError> {
        self.calls.set(self.calls.get() + 1);
        self.payloads.borrow_mut().push(payload.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Collaboration".to_owned(),
        message: "Let's build something.".to_owned(),
    }
}

// =============================================================
// ContactField
// =============================================================

#[test]
fn field_from_name_resolves_inputs() {
    assert_eq!(ContactField::from_name("name"), Some(ContactField::Name));
    assert_eq!(ContactField::from_name("email"), Some(ContactField::Email));
    assert_eq!(ContactField::from_name("subject"), Some(ContactField::Subject));
    assert_eq!(ContactField::from_name("message"), Some(ContactField::Message));
    assert_eq!(ContactField::from_name("phone"), None);
}

#[test]
fn only_subject_is_optional() {
    assert!(ContactField::Name.is_required());
    assert!(ContactField::Email.is_required());
    assert!(!ContactField::Subject.is_required());
    assert!(ContactField::Message.is_required());
}

#[test]
fn set_and_get_round_trip_each_field() {
    let mut form = ContactForm::default();
    form.set(ContactField::Email, "a@b.c".to_owned());
    form.set(ContactField::Message, "hi".to_owned());
    assert_eq!(form.get(ContactField::Email), "a@b.c");
    assert_eq!(form.get(ContactField::Message), "hi");
    assert_eq!(form.get(ContactField::Name), "");
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_rejects_each_missing_required_field() {
    for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
        let mut form = filled_form();
        form.set(field, String::new());
        assert_eq!(form.validate(), Err(ContactError::MissingField(field)));
    }
}

#[test]
fn validate_accepts_whitespace_only_required_field() {
    let mut form = filled_form();
    form.name = "   ".to_owned();
    let payload = form.validate().unwrap();
    assert_eq!(payload.name, "   ");
}

#[test]
fn validate_reports_first_missing_field_in_form_order() {
    let form = ContactForm::default();
    assert_eq!(form.validate(), Err(ContactError::MissingField(ContactField::Name)));
}

#[test]
fn validate_defaults_empty_subject() {
    let mut form = filled_form();
    form.subject = String::new();
    let payload = form.validate().unwrap();
    assert_eq!(payload.subject, DEFAULT_SUBJECT);
}

#[test]
fn validate_keeps_whitespace_subject_as_typed() {
    let mut form = filled_form();
    form.subject = "  ".to_owned();
    let payload = form.validate().unwrap();
    assert_eq!(payload.subject, "  ");
}

#[test]
fn validate_passes_fields_through() {
    let payload = filled_form().validate().unwrap();
    assert_eq!(payload.name, "Ada");
    assert_eq!(payload.email, "ada@example.com");
    assert_eq!(payload.subject, "Collaboration");
    assert_eq!(payload.message, "Let's build something.");
}

#[test]
fn missing_field_error_names_field() {
    let err = ContactError::MissingField(ContactField::Email);
    assert_eq!(err.to_string(), "missing required field: email");
}

// =============================================================
// submit scenarios
// =============================================================

#[test]
fn empty_form_never_calls_transport() {
    let transport = MockTransport::accepting();
    let mut form = ContactForm::default();
    let outcome = block_on(submit(&mut form, &transport));
    assert_eq!(outcome, SubmitOutcome::Invalid(ContactError::MissingField(ContactField::Name)));
    assert_eq!(transport.calls.get(), 0);
    assert_eq!(outcome.notice().title, "Please fill in all required fields");
    assert_eq!(outcome.notice().variant, ToastVariant::Destructive);
}

#[test]
fn partially_filled_form_never_calls_transport() {
    let transport = MockTransport::accepting();
    let mut form = filled_form();
    form.message.clear();
    let before = form.clone();
    let outcome = block_on(submit(&mut form, &transport));
    assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
    assert_eq!(transport.calls.get(), 0);
    assert_eq!(form, before);
}

#[test]
fn successful_delivery_sends_once_and_clears_form() {
    let transport = MockTransport::accepting();
    let mut form = filled_form();
    form.subject.clear();
    let outcome = block_on(submit(&mut form, &transport));
    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(transport.calls.get(), 1);
    let sent = &transport.payloads.borrow()[0];
    assert_eq!(sent.name, "Ada");
    assert_eq!(sent.email, "ada@example.com");
    assert_eq!(sent.subject, DEFAULT_SUBJECT);
    assert_eq!(sent.message, "Let's build something.");
    assert!(form.is_empty());
    assert_eq!(outcome.notice().title, "Message sent successfully!");
    assert_eq!(outcome.notice().description, Some("I'll get back to you within 24 hours."));
}

#[test]
fn failed_delivery_keeps_entered_values() {
    let transport = MockTransport::rejecting(DeliveryError::Rejected { status: 502 });
    let mut form = filled_form();
    let outcome = block_on(submit(&mut form, &transport));
    assert_eq!(outcome, SubmitOutcome::Failed(DeliveryError::Rejected { status: 502 }));
    assert_eq!(transport.calls.get(), 1);
    assert_eq!(form, filled_form());
    assert_eq!(outcome.notice().title, "Failed to send message");
    assert_eq!(outcome.notice().variant, ToastVariant::Destructive);
}

#[test]
fn repeated_submissions_each_deliver() {
    let transport = MockTransport::rejecting(DeliveryError::Request("offline".to_owned()));
    let mut form = filled_form();
    block_on(submit(&mut form, &transport));
    block_on(submit(&mut form, &transport));
    assert_eq!(transport.calls.get(), 2);
}

#[test]
fn whitespace_only_name_still_delivers_once() {
    let transport = MockTransport::accepting();
    let mut form = filled_form();
    form.name = "   ".to_owned();
    let outcome = block_on(submit(&mut form, &transport));
    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(transport.calls.get(), 1);
    assert_eq!(transport.payloads.borrow()[0].name, "   ");
}

#[test]
fn settle_only_clears_on_success() {
    let mut form = filled_form();
    assert!(matches!(settle(&mut form, Err(DeliveryError::Unavailable)), SubmitOutcome::Failed(_)));
    assert_eq!(form, filled_form());
    assert_eq!(settle(&mut form, Ok(())), SubmitOutcome::Sent);
    assert!(form.is_empty());
}

#[test]
fn form_from_payload_round_trips() {
    let payload = filled_form().validate().unwrap();
    let form = ContactForm::from(payload.clone());
    assert_eq!(form.validate().unwrap(), payload);
}
