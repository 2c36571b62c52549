use super::*;

fn payload(message: &str) -> ContactPayload {
    ContactPayload {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hiring".into(),
        message: message.into(),
    }
}

#[test]
fn template_injects_every_field() {
    let html = render_contact_template(&payload("Let's talk"));
    assert!(html.contains("Ada"));
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("Hiring"));
    assert!(html.contains("Let&#39;s talk"));
    for placeholder in ["{{NAME}}", "{{EMAIL}}", "{{SUBJECT}}", "{{MESSAGE}}"] {
        assert!(!html.contains(placeholder), "{placeholder} left in output");
    }
}

#[test]
fn template_escapes_markup() {
    let html = render_contact_template(&payload("<script>alert(\"x\")</script> & more"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; more"));
}

#[test]
fn subject_names_the_visitor() {
    assert_eq!(subject_line(&payload("x")), "Portfolio contact: Hiring (from Ada <ada@example.com>)");
}

#[test]
fn escape_html_passes_plain_text() {
    assert_eq!(escape_html("plain text 123"), "plain text 123");
}
