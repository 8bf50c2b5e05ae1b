//! Configuration management for Teamgate Core

use crate::domain::SignupSettings;
use anyhow::{bail, Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Signup switches, invite salt and domain allow-list
    pub signup: SignupSettings,
    /// Public base URL that signup links point at
    pub signup_base_url: String,
    pub telemetry: TelemetryConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// `json` or `pretty`
    pub log_format: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str, default: bool| -> Result<bool> {
            match lookup(key) {
                Some(value) => {
                    parse_bool(&value).with_context(|| format!("{} must be true or false", key))
                }
                None => Ok(default),
            }
        };

        let invite_salt = lookup("INVITE_SALT").context("INVITE_SALT is required")?;
        if invite_salt.trim().is_empty() {
            bail!("INVITE_SALT must not be empty");
        }

        let signup_base_url = lookup("SIGNUP_BASE_URL")
            .unwrap_or_else(|| "http://localhost:8065".to_string());
        url::Url::parse(&signup_base_url)
            .with_context(|| format!("SIGNUP_BASE_URL is not a valid URL: {}", signup_base_url))?;

        let log_format = lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string());
        if log_format != "json" && log_format != "pretty" {
            bail!("LOG_FORMAT must be json or pretty, got {}", log_format);
        }

        Ok(Self {
            signup: SignupSettings {
                enable_sign_up_with_email: flag("ENABLE_SIGN_UP_WITH_EMAIL", true)?,
                enable_user_creation: flag("ENABLE_USER_CREATION", true)?,
                invite_salt,
                restrict_creation_to_domains: lookup("RESTRICT_CREATION_TO_DOMAINS")
                    .unwrap_or_default(),
            },
            signup_base_url,
            telemetry: TelemetryConfig { log_format },
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("invalid boolean {:?}", other),
    }
}
