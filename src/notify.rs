// src/notify.rs
// Tell the operator about new activities. Two transports, one message:
// a plain-text list of the new entries plus the page URL.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use serde::Serialize;
use tracing::warn;

use crate::config::consts::*;
use crate::config::ChannelConfig;
use crate::error::NotifyError;

/// Delivery seam. The pipeline only ever sees this trait; tests pass
/// recording or failing stand-ins.
pub trait Notifier {
    fn notify(&self, new_activities: &[String]) -> Result<(), NotifyError>;
}

/// The configured transport, fixed at startup from [`ChannelConfig`].
pub enum Channel {
    Smtp(SmtpChannel),
    HttpApi(HttpApiChannel),
    Disabled,
}

impl Channel {
    pub fn from_config(config: &ChannelConfig) -> Self {
        match config {
            ChannelConfig::HttpApi { api_key } => {
                Channel::HttpApi(HttpApiChannel::new(api_key.clone()))
            }
            ChannelConfig::Smtp { password } => {
                Channel::Smtp(SmtpChannel::new(password.clone()))
            }
            ChannelConfig::Disabled => Channel::Disabled,
        }
    }
}

impl Notifier for Channel {
    fn notify(&self, new_activities: &[String]) -> Result<(), NotifyError> {
        match self {
            Channel::Smtp(ch) => ch.send(new_activities),
            Channel::HttpApi(ch) => ch.send(new_activities),
            Channel::Disabled => {
                warn!(
                    "no notification channel configured ({ENV_BREVO_API_KEY} or {ENV_EMAIL_PASSWORD}); \
                     skipping notification"
                );
                Ok(())
            }
        }
    }
}

fn message_body(new_activities: &[String]) -> String {
    format!(
        "Se han publicado nuevas actividades:\n\n{}\n\n👉 {}",
        new_activities.join("\n"),
        PAGE_URL
    )
}

/* ---------------- SMTP channel ---------------- */

pub struct SmtpChannel {
    password: String,
}

impl SmtpChannel {
    pub fn new(password: String) -> Self {
        Self { password }
    }

    fn send(&self, new_activities: &[String]) -> Result<(), NotifyError> {
        let email = Message::builder()
            .from(format!("{EMAIL_SENDER_NAME} <{EMAIL_SENDER}>").parse()?)
            .to(EMAIL_RECIPIENT.parse()?)
            .subject(EMAIL_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(message_body(new_activities))?;

        // Implicit TLS on 465, per the provider.
        let mailer = SmtpTransport::relay(SMTP_HOST)?
            .credentials(Credentials::new(EMAIL_SENDER.into(), self.password.clone()))
            .build();

        mailer.send(&email)?;
        Ok(())
    }
}

/* ---------------- HTTP email-API channel (Brevo) ---------------- */

#[derive(Serialize)]
struct EmailPayload<'a> {
    sender: Party<'a>,
    to: [Recipient<'a>; 1],
    subject: &'a str,
    #[serde(rename = "textContent")]
    text_content: String,
}

#[derive(Serialize)]
struct Party<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct Recipient<'a> {
    email: &'a str,
}

pub struct HttpApiChannel {
    api_key: String,
    client: reqwest::blocking::Client,
}

impl HttpApiChannel {
    pub fn new(api_key: String) -> Self {
        Self { api_key, client: reqwest::blocking::Client::new() }
    }

    fn send(&self, new_activities: &[String]) -> Result<(), NotifyError> {
        let payload = EmailPayload {
            sender: Party { name: EMAIL_SENDER_NAME, email: EMAIL_SENDER },
            to: [Recipient { email: EMAIL_RECIPIENT }],
            subject: EMAIL_SUBJECT,
            text_content: message_body(new_activities),
        };

        let resp = self
            .client
            .post(BREVO_ENDPOINT)
            .header("accept", "application/json")
            .header("api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&payload)
            .send()?;

        let status = resp.status();
        if status != reqwest::StatusCode::CREATED {
            let body = resp.text().unwrap_or_default();
            warn!("email api rejected the message: {status}: {body}");
            return Err(NotifyError::Api { status, body });
        }
        Ok(())
    }
}
