//! Process-wide settings: API key, base URL, venue, account and symbol.
//!
//! Built once at start-up and handed to the client by value. Nothing in the
//! SDK reads these from globals.

use crate::error::SdkError;
use crate::network::{DEFAULT_ACCOUNT, DEFAULT_API_URL, DEFAULT_SYMBOL, DEFAULT_VENUE};

pub const ENV_API_KEY: &str = "STOCKFIGHTER_API_KEY";
pub const ENV_BASE_URL: &str = "STOCKFIGHTER_BASE_URL";
pub const ENV_VENUE: &str = "STOCKFIGHTER_VENUE";
pub const ENV_ACCOUNT: &str = "STOCKFIGHTER_ACCOUNT";
pub const ENV_SYMBOL: &str = "STOCKFIGHTER_SYMBOL";

/// Immutable client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    api_key: String,
    venue: String,
    account: String,
    symbol: String,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Read the configuration from `STOCKFIGHTER_*` environment variables.
    ///
    /// Only the API key is required; the rest fall back to the test-exchange
    /// defaults in [`crate::network`].
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| SdkError::Config(format!("{ENV_API_KEY} is not set")))?;

        let mut builder = Config::builder().api_key(&api_key);
        if let Some(url) = lookup(ENV_BASE_URL) {
            builder = builder.base_url(&url);
        }
        if let Some(venue) = lookup(ENV_VENUE) {
            builder = builder.venue(&venue);
        }
        if let Some(account) = lookup(ENV_ACCOUNT) {
            builder = builder.account(&account);
        }
        if let Some(symbol) = lookup(ENV_SYMBOL) {
            builder = builder.symbol(&symbol);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn venue(&self) -> &str {
        &self.venue
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("venue", &self.venue)
            .field("account", &self.account)
            .field("symbol", &self.symbol)
            .finish()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct ConfigBuilder {
    base_url: String,
    api_key: Option<String>,
    venue: String,
    account: String,
    symbol: String,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            venue: DEFAULT_VENUE.to_string(),
            account: DEFAULT_ACCOUNT.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
        }
    }
}

impl ConfigBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    pub fn venue(mut self, venue: &str) -> Self {
        self.venue = venue.to_string();
        self
    }

    pub fn account(mut self, account: &str) -> Self {
        self.account = account.to_string();
        self
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = symbol.to_string();
        self
    }

    pub fn build(self) -> Result<Config, SdkError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| SdkError::Config("API key is required".to_string()))?;

        // Same acceptance rule as an HTTP header value: tab or visible ASCII.
        if !api_key.bytes().all(|b| b == b'\t' || (0x20..0x7f).contains(&b)) {
            return Err(SdkError::Config(
                "API key contains characters not allowed in an HTTP header".to_string(),
            ));
        }

        Ok(Config {
            base_url: self.base_url,
            api_key,
            venue: self.venue,
            account: self.account,
            symbol: self.symbol,
        })
    }
}
