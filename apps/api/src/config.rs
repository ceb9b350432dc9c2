use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_RELAY_URL: &str = "https://api.web3forms.com/submit";

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; everything has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub profile_path: PathBuf,
    /// Re-read the profile when the file changes on disk (development).
    pub profile_hot_reload: bool,
    /// Web3Forms access key. The contact endpoint refuses to relay without it.
    pub relay_access_key: Option<String>,
    pub relay_url: String,
    /// Sent as `Origin`/`Referer` on relay calls; some relays gate on it.
    pub site_origin: Option<String>,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            profile_path: std::env::var("PROFILE_PATH")
                .unwrap_or_else(|_| "content/profile.json".to_string())
                .into(),
            profile_hot_reload: parse_bool(optional_env("PROFILE_HOT_RELOAD").as_deref())
                .context("PROFILE_HOT_RELOAD must be true or false")?,
            relay_access_key: optional_env("WEB3FORMS_ACCESS_KEY"),
            relay_url: optional_env("CONTACT_RELAY_URL")
                .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string()),
            site_origin: optional_env("SITE_ORIGIN"),
            cors_allowed_origin: optional_env("CORS_ALLOWED_ORIGIN"),
        })
    }
}

/// Unset and blank variables both count as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(raw: Option<&str>) -> Result<bool> {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => anyhow::bail!("unrecognised boolean '{other}'"),
    }
}
