//! Storefront configuration loaded from environment variables.
//!
//! One storefront component serves every deployment; what differs between
//! sites is carried here.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_BUSINESS_NAME` - Business name used to greet in order messages
//! - `STOREFRONT_WHATSAPP_NUMBER` - International number receiving orders
//!
//! ## Optional
//! - `STOREFRONT_PROFILE_DIR` - Directory holding durable storage (default: .vitrine)
//! - `STOREFRONT_CART_SLOT` - Storage slot name for the cart (default: cart)
//! - `STOREFRONT_SLIDE_INTERVAL_SECS` - Seconds between hero slides (default: 5)
//! - `STOREFRONT_SLIDE_COUNT` - Number of hero slides (default: 3)
//! - `STOREFRONT_PAUSE_ON_HOVER` - Pause slideshow under the pointer (default: true)
//! - `STOREFRONT_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use vitrine_core::PhoneNumber;

use crate::cart::DEFAULT_SLOT;
use crate::telemetry::LogFormat;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Business name shown in order messages
    pub business_name: String,
    /// Number receiving WhatsApp orders
    pub whatsapp_number: PhoneNumber,
    /// Directory holding durable storage slots
    pub profile_dir: PathBuf,
    /// Storage slot name for the cart
    pub cart_slot: String,
    /// Hero slideshow settings
    pub slideshow: SlideshowConfig,
    /// Log output format
    pub log_format: LogFormat,
}

/// Hero slideshow configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowConfig {
    /// Time each slide stays visible
    pub interval: Duration,
    /// Number of slides
    pub slide_count: usize,
    /// Whether hovering pauses the slideshow
    pub pause_on_hover: bool,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(5),
            slide_count: 3,
            pause_on_hover: true,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);

        let business_name = env.required("STOREFRONT_BUSINESS_NAME")?;
        let whatsapp_number = PhoneNumber::parse(&env.required("STOREFRONT_WHATSAPP_NUMBER")?)
            .map_err(|e| invalid("STOREFRONT_WHATSAPP_NUMBER", &e))?;
        let profile_dir = PathBuf::from(env.or_default("STOREFRONT_PROFILE_DIR", ".vitrine"));
        let cart_slot = env.or_default("STOREFRONT_CART_SLOT", DEFAULT_SLOT);
        let slideshow = SlideshowConfig::from_env(&env)?;
        let log_format = env
            .or_default("STOREFRONT_LOG_FORMAT", "pretty")
            .parse::<LogFormat>()
            .map_err(|e| invalid("STOREFRONT_LOG_FORMAT", &e))?;

        Ok(Self {
            business_name,
            whatsapp_number,
            profile_dir,
            cart_slot,
            slideshow,
            log_format,
        })
    }
}

impl SlideshowConfig {
    fn from_env<F>(env: &Env<F>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secs = env
            .or_default("STOREFRONT_SLIDE_INTERVAL_SECS", "5")
            .parse::<u64>()
            .map_err(|e| invalid("STOREFRONT_SLIDE_INTERVAL_SECS", &e))?;
        if secs == 0 {
            return Err(invalid("STOREFRONT_SLIDE_INTERVAL_SECS", &"must be > 0"));
        }

        let slide_count = env
            .or_default("STOREFRONT_SLIDE_COUNT", "3")
            .parse::<usize>()
            .map_err(|e| invalid("STOREFRONT_SLIDE_COUNT", &e))?;
        if slide_count == 0 {
            return Err(invalid("STOREFRONT_SLIDE_COUNT", &"must be > 0"));
        }

        let pause_on_hover = env
            .or_default("STOREFRONT_PAUSE_ON_HOVER", "true")
            .parse::<bool>()
            .map_err(|e| invalid("STOREFRONT_PAUSE_ON_HOVER", &e))?;

        Ok(Self {
            interval: Duration::from_secs(secs),
            slide_count,
            pause_on_hover,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Variable lookup with the required/default helpers.
struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Get a required variable. Blank values count as missing.
    fn required(&self, key: &str) -> Result<String, ConfigError> {
        (self.0)(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
    }

    /// Get a variable with a default value.
    fn or_default(&self, key: &str, default: &str) -> String {
        (self.0)(key).unwrap_or_else(|| default.to_string())
    }
}

fn invalid(key: &str, err: &impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), err.to_string())
}
