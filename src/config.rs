//! Runtime configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) and then builds a [`Config`] once at
//! startup. Handlers read it through `AppState`. Parsing goes through a lookup
//! closure so tests can feed values without touching the process environment.

use std::path::PathBuf;

use crate::services::carousel::FlipPolicy;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_SITE_TITLE: &str = "Superheroes";
pub const DEFAULT_EMOJI_ENDPOINT: &str = "https://cdn.jsdelivr.net/gh/jdecked/twemoji@15.1.0/assets/72x72";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: String },
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: String, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_url: String,
    /// Base URL that avatar file names are appended to.
    pub image_endpoint: String,
    /// Twemoji-style host serving `{code points}.png` emoji glyphs.
    pub emoji_endpoint: String,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub cookie_secure: bool,
    pub flip_policy: FlipPolicy,
    pub assets_dir: PathBuf,
    pub site_title: String,
}

impl Config {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// Required:
    /// - `DATABASE_URL`
    /// - `IMAGE_ENDPOINT`
    ///
    /// Optional:
    /// - `PORT` (default 3000)
    /// - `DB_MAX_CONNECTIONS` (default 5)
    /// - `DB_RUN_MIGRATIONS` (default false)
    /// - `COOKIE_SECURE` (default: true when `PUBLIC_URL` is https)
    /// - `CAROUSEL_FLIP_POLICY`: `reset` (default) or `persist`
    /// - `ASSETS_DIR` (default `<crate>/assets`)
    /// - `SITE_TITLE` (default "Superheroes")
    /// - `EMOJI_ENDPOINT` (default: Twemoji 72x72 PNGs on jsDelivr)
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = required(&lookup, "DATABASE_URL")?;
        let image_endpoint = required(&lookup, "IMAGE_ENDPOINT")?
            .trim_end_matches('/')
            .to_owned();
        let emoji_endpoint = lookup("EMOJI_ENDPOINT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EMOJI_ENDPOINT.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;
        let run_migrations = bool_or(&lookup, "DB_RUN_MIGRATIONS", false)?;

        let https_public_url = lookup("PUBLIC_URL").is_some_and(|url| url.starts_with("https://"));
        let cookie_secure = bool_or(&lookup, "COOKIE_SECURE", https_public_url)?;

        let flip_policy = match lookup("CAROUSEL_FLIP_POLICY") {
            None => FlipPolicy::default(),
            Some(raw) => FlipPolicy::parse(&raw).ok_or(ConfigError::Invalid { var: "CAROUSEL_FLIP_POLICY".into(), value: raw })?,
        };

        let assets_dir = lookup("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"));
        let site_title = lookup("SITE_TITLE").unwrap_or_else(|| DEFAULT_SITE_TITLE.to_owned());

        Ok(Self {
            port,
            database_url,
            image_endpoint,
            emoji_endpoint,
            db_max_connections,
            run_migrations,
            cookie_secure,
            flip_policy,
            assets_dir,
            site_title,
        })
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Result<String, ConfigError> {
    lookup(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::Missing { var: var.to_owned() })
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var: var.to_owned(), value: raw }),
    }
}

fn bool_or(lookup: &impl Fn(&str) -> Option<String>, var: &str, default: bool) -> Result<bool, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: var.to_owned(), value: raw }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
