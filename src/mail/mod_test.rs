use super::*;
use config::{EmailJsSettings, MailTimeouts, ResendSettings};

fn timeouts() -> MailTimeouts {
    MailTimeouts { request_secs: 1, connect_secs: 1 }
}

#[test]
fn from_config_selects_emailjs() {
    let config = MailConfig {
        provider: ProviderSettings::EmailJs(EmailJsSettings {
            service_id: "s".into(),
            template_id: "t".into(),
            public_key: "p".into(),
            private_key: None,
            api_url: config::DEFAULT_EMAILJS_API_URL.into(),
        }),
        timeouts: timeouts(),
    };
    let client = MailClient::from_config(config).unwrap();
    assert_eq!(client.provider(), "emailjs");
}

#[test]
fn from_config_selects_resend() {
    let config = MailConfig {
        provider: ProviderSettings::Resend(ResendSettings {
            api_key: "re_test".into(),
            from: "site@example.com".into(),
            to: "me@example.com".into(),
        }),
        timeouts: timeouts(),
    };
    let client = MailClient::from_config(config).unwrap();
    assert_eq!(client.provider(), "resend");
}

#[test]
fn delivery_errors_are_distinguished_from_config_errors() {
    assert!(MailError::ApiRequest("timeout".into()).is_delivery());
    assert!(MailError::ApiResponse { status: 400, body: String::new() }.is_delivery());
    assert!(!MailError::MissingSetting { var: "X".into() }.is_delivery());
    assert!(!MailError::HttpClientBuild("tls".into()).is_delivery());
}
