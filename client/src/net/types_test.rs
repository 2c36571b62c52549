use super::*;

#[test]
fn payload_serializes_with_four_fields() {
    let payload = ContactPayload {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "No subject".to_owned(),
        message: "Hello".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 4);
    assert_eq!(obj["name"], "Ada");
    assert_eq!(obj["email"], "ada@example.com");
    assert_eq!(obj["subject"], "No subject");
    assert_eq!(obj["message"], "Hello");
}

#[test]
fn ok_response_omits_error() {
    let json = serde_json::to_string(&ContactResponse::ok()).unwrap();
    assert_eq!(json, r#"{"ok":true}"#);
}

#[test]
fn error_response_carries_message() {
    let parsed: ContactResponse = serde_json::from_str(r#"{"ok":false,"error":"delivery failed"}"#).unwrap();
    assert_eq!(parsed, ContactResponse::error("delivery failed"));
}

#[test]
fn response_without_error_field_parses() {
    let parsed: ContactResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
    assert!(parsed.ok);
    assert!(parsed.error.is_none());
}
