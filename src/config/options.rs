// src/config/options.rs
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use super::consts::*;

/// Which notification transport is configured.
///
/// Decided once at startup from the environment; the pipeline never
/// re-reads the environment after this.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChannelConfig {
    /// Brevo transactional-email HTTP API.
    HttpApi { api_key: String },
    /// Direct SMTP session as the fixed sender address.
    Smtp { password: String },
    /// Neither secret present; notifications are skipped.
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub page_url: String,
    pub snapshot_path: PathBuf,
    pub timeout: Duration,
    pub port: u16,
    pub channel: ChannelConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_url: PAGE_URL.into(),
            snapshot_path: PathBuf::from(SNAPSHOT_FILE),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            port: DEFAULT_PORT,
            channel: ChannelConfig::Disabled,
        }
    }
}

impl Config {
    /// Build the full configuration from the environment.
    /// CLI flags may override fields afterwards.
    pub fn from_env() -> Self {
        Self {
            channel: channel_from_env(),
            port: port_from_env(),
            ..Self::default()
        }
    }
}

fn channel_from_env() -> ChannelConfig {
    let api_key = nonempty_var(ENV_BREVO_API_KEY);
    let password = nonempty_var(ENV_EMAIL_PASSWORD);

    match (api_key, password) {
        (Some(api_key), Some(_)) => {
            warn!(
                "both {ENV_BREVO_API_KEY} and {ENV_EMAIL_PASSWORD} are set; using the HTTP API channel"
            );
            ChannelConfig::HttpApi { api_key }
        }
        (Some(api_key), None) => ChannelConfig::HttpApi { api_key },
        (None, Some(password)) => ChannelConfig::Smtp { password },
        (None, None) => ChannelConfig::Disabled,
    }
}

fn port_from_env() -> u16 {
    match env::var(ENV_PORT) {
        Ok(s) => match s.trim().parse() {
            Ok(p) => p,
            Err(_) => {
                warn!("{ENV_PORT}={s:?} is not a valid port; using {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        },
        Err(_) => DEFAULT_PORT,
    }
}

fn nonempty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
