use std::fmt;
use std::time::Duration;

use pricecache_core::errors::{Error, Result};
use pricecache_market_data::provider::eod::DEFAULT_BASE_URL;
use pricecache_market_data::DEFAULT_EXCHANGE;
use pricecache_storage_firebase::ServiceAccountKey;

pub const ENV_SERVICE_ACCOUNT: &str = "FIREBASE_SERVICE_ACCOUNT_BASE64";
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_EOD_API_KEY: &str = "EOD_API_KEY";
pub const ENV_EOD_BASE_URL: &str = "EOD_API_BASE_URL";
pub const ENV_EXCHANGE: &str = "PRICE_REFRESH_EXCHANGE";
pub const ENV_DELAY_MS: &str = "PRICE_REFRESH_DELAY_MS";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "PRICE_REFRESH_HTTP_TIMEOUT_SECS";

const DEFAULT_DELAY_MS: u64 = 500;

/// Everything a run needs, read and validated once at startup.
#[derive(Clone)]
pub struct Config {
    pub service_account: ServiceAccountKey,
    pub database_url: String,
    pub eod_api_key: String,
    pub eod_base_url: String,
    pub exchange: String,
    pub pacing_delay: Duration,
    /// `None` keeps the HTTP client's own default.
    pub http_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Blank values
    /// count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |key: &str| get(key).ok_or_else(|| Error::MissingConfigKey(key.to_string()));

        let service_account = ServiceAccountKey::from_base64(&require(ENV_SERVICE_ACCOUNT)?)?;

        let database_url = require(ENV_DATABASE_URL)?;
        validate_http_url(ENV_DATABASE_URL, &database_url)?;

        let eod_api_key = require(ENV_EOD_API_KEY)?;

        let eod_base_url = get(ENV_EOD_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_http_url(ENV_EOD_BASE_URL, &eod_base_url)?;

        let exchange = get(ENV_EXCHANGE).unwrap_or_else(|| DEFAULT_EXCHANGE.to_string());

        let pacing_delay = match get(ENV_DELAY_MS) {
            Some(raw) => Duration::from_millis(parse_number(ENV_DELAY_MS, &raw)?),
            None => Duration::from_millis(DEFAULT_DELAY_MS),
        };

        let http_timeout = match get(ENV_HTTP_TIMEOUT_SECS) {
            Some(raw) => match parse_number(ENV_HTTP_TIMEOUT_SECS, &raw)? {
                0 => {
                    return Err(Error::InvalidConfigValue(format!(
                        "{ENV_HTTP_TIMEOUT_SECS} must be greater than zero"
                    )))
                }
                secs => Some(Duration::from_secs(secs)),
            },
            None => None,
        };

        Ok(Self {
            service_account,
            database_url,
            eod_api_key,
            eod_base_url,
            exchange,
            pacing_delay,
            http_timeout,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("service_account", &self.service_account)
            .field("database_url", &self.database_url)
            .field("eod_api_key", &"<redacted>")
            .field("eod_base_url", &self.eod_base_url)
            .field("exchange", &self.exchange)
            .field("pacing_delay", &self.pacing_delay)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

fn validate_http_url(key: &str, value: &str) -> Result<()> {
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(())
    } else {
        Err(Error::InvalidConfigValue(format!(
            "{key} must be an http(s) URL, got '{value}'"
        )))
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|e| Error::InvalidConfigValue(format!("{key}='{value}': {e}")))
}
