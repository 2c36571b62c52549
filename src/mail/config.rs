//! Mail relay configuration parsed from environment variables.

use super::types::MailError;

pub const DEFAULT_EMAILJS_API_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const DEFAULT_MAIL_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MAIL_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailProviderKind {
    EmailJs,
    Resend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// EmailJS REST credentials. The public key is EmailJS's `user_id`; the
/// private key, when set, is sent as `accessToken`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsSettings {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub private_key: Option<String>,
    pub api_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendSettings {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSettings {
    EmailJs(EmailJsSettings),
    Resend(ResendSettings),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub provider: ProviderSettings,
    pub timeouts: MailTimeouts,
}

impl MailConfig {
    /// Build typed mail config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`MailConfig::from_lookup`].
    pub fn from_env() -> Result<Self, MailError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed mail config from a key lookup.
    ///
    /// Required for `MAIL_PROVIDER=emailjs` (default):
    /// - `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`, `EMAILJS_PUBLIC_KEY`
    ///
    /// Required for `MAIL_PROVIDER=resend`:
    /// - `RESEND_API_KEY`, `CONTACT_FROM_EMAIL`, `CONTACT_TO_EMAIL`
    ///
    /// Optional:
    /// - `EMAILJS_PRIVATE_KEY`
    /// - `EMAILJS_API_URL`: default [`DEFAULT_EMAILJS_API_URL`]
    /// - `MAIL_REQUEST_TIMEOUT_SECS`: default 20
    /// - `MAIL_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// Blank values count as unset. The provider name is case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::ConfigParse`] for an unknown provider and
    /// [`MailError::MissingSetting`] for the first absent required key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, MailError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let require = |key: &str| get(key).ok_or_else(|| MailError::MissingSetting { var: key.to_owned() });

        let provider = match parse_provider(get("MAIL_PROVIDER").as_deref())? {
            MailProviderKind::EmailJs => ProviderSettings::EmailJs(EmailJsSettings {
                service_id: require("EMAILJS_SERVICE_ID")?,
                template_id: require("EMAILJS_TEMPLATE_ID")?,
                public_key: require("EMAILJS_PUBLIC_KEY")?,
                private_key: get("EMAILJS_PRIVATE_KEY"),
                api_url: get("EMAILJS_API_URL").unwrap_or_else(|| DEFAULT_EMAILJS_API_URL.to_owned()),
            }),
            MailProviderKind::Resend => ProviderSettings::Resend(ResendSettings {
                api_key: require("RESEND_API_KEY")?,
                from: require("CONTACT_FROM_EMAIL")?,
                to: require("CONTACT_TO_EMAIL")?,
            }),
        };

        let timeouts = MailTimeouts {
            request_secs: parse_u64(get("MAIL_REQUEST_TIMEOUT_SECS"), DEFAULT_MAIL_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(get("MAIL_CONNECT_TIMEOUT_SECS"), DEFAULT_MAIL_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { provider, timeouts })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

fn parse_provider(raw: Option<&str>) -> Result<MailProviderKind, MailError> {
    let name = raw.unwrap_or("emailjs").to_ascii_lowercase();
    match name.as_str() {
        "emailjs" => Ok(MailProviderKind::EmailJs),
        "resend" => Ok(MailProviderKind::Resend),
        other => Err(MailError::ConfigParse(format!("unknown MAIL_PROVIDER: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
