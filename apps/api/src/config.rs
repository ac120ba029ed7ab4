use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::contact::service::{DEFAULT_FORM_TTL, DEFAULT_MAX_FORMS};
use crate::theme::Theme;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Fixed credential appended to every contact submission.
    pub contact_access_key: String,
    pub contact_endpoint: String,
    /// `None` leaves the relay call unbounded.
    pub contact_relay_timeout: Option<Duration>,
    pub contact_form_ttl: Duration,
    pub contact_max_forms: usize,
    pub asset_dir: PathBuf,
    pub placeholder_image: String,
    pub enable_ambient_visuals: bool,
    pub default_theme: Theme,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: optional_env("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            contact_access_key: require_env("CONTACT_ACCESS_KEY")?,
            contact_endpoint: optional_env("CONTACT_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_CONTACT_ENDPOINT.to_string()),
            contact_relay_timeout: optional_env("CONTACT_RELAY_TIMEOUT_SECS")
                .map(|v| {
                    v.parse::<u64>()
                        .map(Duration::from_secs)
                        .context("CONTACT_RELAY_TIMEOUT_SECS must be a whole number of seconds")
                })
                .transpose()?,
            contact_form_ttl: optional_env("CONTACT_FORM_TTL_SECS")
                .map(|v| v.parse::<u64>().map(Duration::from_secs))
                .transpose()
                .context("CONTACT_FORM_TTL_SECS must be a whole number of seconds")?
                .unwrap_or(DEFAULT_FORM_TTL),
            contact_max_forms: optional_env("CONTACT_MAX_FORMS")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("CONTACT_MAX_FORMS must be a positive integer")?
                .unwrap_or(DEFAULT_MAX_FORMS),
            asset_dir: PathBuf::from(
                optional_env("ASSET_DIR").unwrap_or_else(|| "public".to_string()),
            ),
            placeholder_image: optional_env("PLACEHOLDER_IMAGE")
                .unwrap_or_else(|| "placeholder.svg".to_string()),
            enable_ambient_visuals: optional_env("ENABLE_AMBIENT_VISUALS")
                .map(|v| parse_flag(&v))
                .transpose()
                .context("ENABLE_AMBIENT_VISUALS must be true or false")?
                .unwrap_or(true),
            default_theme: optional_env("DEFAULT_THEME")
                .map(|v| v.parse::<Theme>())
                .transpose()
                .map_err(anyhow::Error::msg)
                .context("DEFAULT_THEME is invalid")?
                .unwrap_or_default(),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("'{other}' is not a boolean"),
    }
}
