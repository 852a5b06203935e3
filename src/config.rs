//! Configuration for the contact-card core.
//!
//! Every field has a default — the owner record defaults to the card this
//! system was built for — so `from_env` succeeds in an empty environment.
//! Values that are present are validated: a malformed owner phone or email
//! is a configuration error, not something to discover at export time.

use crate::error::{ConfigError, ConfigResult};
use crate::models::OwnerContact;
use std::env;

/// Default owner record, used when the environment overrides nothing.
const DEFAULT_FIRST_NAME: &str = "Dan";
const DEFAULT_LAST_NAME: &str = "Donahue";
const DEFAULT_PHONE: &str = "+13129537098";
const DEFAULT_EMAIL: &str = "macdonahue@mac.com";

/// Configuration for a card session.
#[derive(Debug, Clone)]
pub struct Config {
    /// The card owner's contact record
    pub owner: OwnerContact,

    /// Delay between the export and the follow-up prompt, in milliseconds
    /// (default: 400). Any value ≥ 0 is correct; only smoothness differs.
    pub prompt_delay_ms: u64,

    /// Delay before the transient export document is released, in
    /// milliseconds (default: 2000)
    pub export_release_delay_ms: u64,

    /// Cache key for the visitor's name (default: "dd_name")
    pub cache_key_name: String,

    /// Cache key for the visitor's email (default: "dd_email")
    pub cache_key_email: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `CARD_OWNER_FIRST_NAME`, `CARD_OWNER_LAST_NAME`,
    ///   `CARD_OWNER_PHONE`, `CARD_OWNER_EMAIL`: owner record overrides
    /// - `CARD_PROMPT_DELAY_MS`: prompt delay in ms (default: 400)
    /// - `CARD_EXPORT_RELEASE_DELAY_MS`: document release delay in ms
    ///   (default: 2000)
    /// - `CARD_CACHE_KEY_NAME`, `CARD_CACHE_KEY_EMAIL`: cache keys
    /// - `LOG_LEVEL`: logging level (default: "error")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when an override fails
    /// validation (malformed phone/email, non-numeric delay).
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; its absence is not an error.
        let _ = dotenvy::dotenv();

        let first_name =
            env::var("CARD_OWNER_FIRST_NAME").unwrap_or_else(|_| DEFAULT_FIRST_NAME.to_string());
        let last_name =
            env::var("CARD_OWNER_LAST_NAME").unwrap_or_else(|_| DEFAULT_LAST_NAME.to_string());
        let phone = env::var("CARD_OWNER_PHONE").unwrap_or_else(|_| DEFAULT_PHONE.to_string());
        let email = env::var("CARD_OWNER_EMAIL").unwrap_or_else(|_| DEFAULT_EMAIL.to_string());

        let owner = OwnerContact::new(first_name, last_name, &phone, &email).map_err(|e| {
            ConfigError::InvalidValue {
                var: "CARD_OWNER_PHONE / CARD_OWNER_EMAIL".to_string(),
                reason: e.to_string(),
            }
        })?;

        let prompt_delay_ms = Self::parse_env_u64("CARD_PROMPT_DELAY_MS", 400)?;
        let export_release_delay_ms = Self::parse_env_u64("CARD_EXPORT_RELEASE_DELAY_MS", 2000)?;

        let cache_key_name =
            env::var("CARD_CACHE_KEY_NAME").unwrap_or_else(|_| "dd_name".to_string());
        let cache_key_email =
            env::var("CARD_CACHE_KEY_EMAIL").unwrap_or_else(|_| "dd_email".to_string());

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            owner,
            prompt_delay_ms,
            export_release_delay_ms,
            cache_key_name,
            cache_key_email,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            // The defaults are validated literals; construction cannot fail.
            owner: OwnerContact::new(
                DEFAULT_FIRST_NAME,
                DEFAULT_LAST_NAME,
                DEFAULT_PHONE,
                DEFAULT_EMAIL,
            )
            .expect("default owner record is valid"),
            prompt_delay_ms: 400,
            export_release_delay_ms: 2000,
            cache_key_name: "dd_name".to_string(),
            cache_key_email: "dd_email".to_string(),
            log_level: "error".to_string(),
        }
    }
}
