//! # Configuration Module
//!
//! Runtime configuration read from the environment (and a `.env` file when
//! present). The routing core does not depend on any of it.

use anyhow::{anyhow, Context, Result};
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use url::Url;

/// Default port the webhook server listens on
pub const DEFAULT_PORT: u16 = 10000;

/// Default location of the JSON ledger
pub const DEFAULT_DISCOUNT_FILE: &str = "remises.json";

/// How updates are received from Telegram
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportMode {
    Polling,
    /// Telegram pushes updates to `url`; the server listens on `address`
    Webhook { url: Url, address: SocketAddr },
}

/// Where the discount ledger lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerBackend {
    JsonFile(PathBuf),
    Postgres(String),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Telegram bot token
    pub token: String,
    pub transport: TransportMode,
    pub ledger: LedgerBackend,
    pub log_format: LogFormat,
}

impl BotConfig {
    /// Build the configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = var("TELEGRAM_TOKEN")
            .or_else(|| var("TELEGRAM_BOT_TOKEN"))
            .ok_or_else(|| anyhow!("TELEGRAM_TOKEN must be set"))?;

        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got `{raw}`"))?,
            None => DEFAULT_PORT,
        };

        let transport = match var("WEBHOOK_URL") {
            Some(base) => TransportMode::Webhook {
                url: webhook_url(&base, &token)?,
                address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            },
            None => TransportMode::Polling,
        };

        let ledger = match var("DATABASE_URL") {
            Some(database_url) => LedgerBackend::Postgres(database_url),
            None => LedgerBackend::JsonFile(PathBuf::from(
                var("DISCOUNT_FILE").unwrap_or_else(|| DEFAULT_DISCOUNT_FILE.to_string()),
            )),
        };

        let log_format = match var("LOG_FORMAT").as_deref().map(str::to_ascii_lowercase) {
            Some(ref format) if format == "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            token,
            transport,
            ledger,
            log_format,
        })
    }
}

/// Webhook endpoint registered with Telegram: `{base}/webhook/{token}`
fn webhook_url(base: &str, token: &str) -> Result<Url> {
    let full = format!("{}/webhook/{}", base.trim().trim_end_matches('/'), token);
    Url::parse(&full).with_context(|| format!("WEBHOOK_URL is not a valid URL: `{base}`"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<BotConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BotConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_polling_and_json_file() {
        let config = config_from(&[("TELEGRAM_TOKEN", "123:abc")]).unwrap();
        assert_eq!(config.token, "123:abc");
        assert_eq!(config.transport, TransportMode::Polling);
        assert_eq!(
            config.ledger,
            LedgerBackend::JsonFile(PathBuf::from(DEFAULT_DISCOUNT_FILE))
        );
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_missing_token_is_an_error() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("TELEGRAM_TOKEN", "  ")]).is_err());
        assert!(config_from(&[("TELEGRAM_BOT_TOKEN", "123:abc")]).is_ok());
    }

    #[test]
    fn test_webhook_mode() {
        let config = config_from(&[
            ("TELEGRAM_TOKEN", "123:abc"),
            ("WEBHOOK_URL", "https://seshat.example.org/"),
            ("PORT", "8443"),
        ])
        .unwrap();

        match config.transport {
            TransportMode::Webhook { url, address } => {
                assert_eq!(url.as_str(), "https://seshat.example.org/webhook/123:abc");
                assert_eq!(address.port(), 8443);
            }
            TransportMode::Polling => panic!("expected webhook mode"),
        }
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(config_from(&[("TELEGRAM_TOKEN", "t"), ("PORT", "http")]).is_err());
        assert!(config_from(&[("TELEGRAM_TOKEN", "t"), ("WEBHOOK_URL", "not a url")]).is_err());
    }

    #[test]
    fn test_database_url_selects_postgres() {
        let config = config_from(&[
            ("TELEGRAM_TOKEN", "t"),
            ("DATABASE_URL", "postgres://localhost/seshat"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(
            config.ledger,
            LedgerBackend::Postgres("postgres://localhost/seshat".to_string())
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
