use super::*;
use crate::state::test_helpers::{RecordingRelay, test_app_state, test_app_state_with_mail};

fn payload(name: &str, email: &str, subject: &str, message: &str) -> ContactPayload {
    ContactPayload { name: name.into(), email: email.into(), subject: subject.into(), message: message.into() }
}

#[tokio::test]
async fn delivers_valid_submission_once() {
    let relay = RecordingRelay::accepting();
    let state = test_app_state_with_mail(relay.clone());

    let (status, Json(body)) =
        send_contact(State(state), Json(payload("Ada", "ada@example.com", "Hi", "Hello"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, ContactResponse::ok());
    assert_eq!(relay.sent(), vec![payload("Ada", "ada@example.com", "Hi", "Hello")]);
}

#[tokio::test]
async fn empty_subject_is_defaulted_before_relay() {
    let relay = RecordingRelay::accepting();
    let state = test_app_state_with_mail(relay.clone());

    let (status, _) = send_contact(State(state), Json(payload("Ada", "ada@example.com", "", "Hello"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(relay.sent()[0].subject, "No subject");
}

#[tokio::test]
async fn whitespace_only_fields_are_relayed_as_typed() {
    let relay = RecordingRelay::accepting();
    let state = test_app_state_with_mail(relay.clone());

    let (status, _) = send_contact(State(state), Json(payload("  ", "ada@example.com", " ", "Hello"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(relay.sent(), vec![payload("  ", "ada@example.com", " ", "Hello")]);
}

#[tokio::test]
async fn missing_required_field_is_rejected_without_relay_call() {
    let relay = RecordingRelay::accepting();
    let state = test_app_state_with_mail(relay.clone());

    let (status, Json(body)) = send_contact(State(state), Json(payload("Ada", "", "Hi", "Hello"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.ok);
    assert_eq!(body.error.as_deref(), Some("missing required field: email"));
    assert!(relay.sent().is_empty());
}

#[tokio::test]
async fn unconfigured_relay_answers_service_unavailable() {
    let (status, Json(body)) =
        send_contact(State(test_app_state()), Json(payload("Ada", "ada@example.com", "", "Hello"))).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(!body.ok);
}

#[tokio::test]
async fn provider_rejection_answers_bad_gateway() {
    let relay = RecordingRelay::rejecting(400);
    let state = test_app_state_with_mail(relay.clone());

    let (status, Json(body)) =
        send_contact(State(state), Json(payload("Ada", "ada@example.com", "", "Hello"))).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, ContactResponse::error("delivery failed"));
    assert_eq!(relay.sent().len(), 1);
}

#[test]
fn config_errors_map_to_internal_error() {
    let err = MailError::HttpClientBuild("tls".into());
    assert_eq!(mail_error_to_status(&err), StatusCode::INTERNAL_SERVER_ERROR);
}
