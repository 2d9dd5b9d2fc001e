//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! None - every variable has a development-friendly default or is optional.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `SITE_BASE_URL` - Canonical site origin used in page metadata
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RESEND_API_KEY` - Transactional-email provider key (enables delivery if set)
//! - `CONTACT_RECIPIENT` - Address contact submissions are relayed to
//! - `CONTACT_FROM` - Sender address on relayed submissions
//! - `PREORDER_URL` - Absolute URL of the book preorder page (shows the
//!   preorder action when set)
//! - `OG_FONT_PATH` - Font file used for text layers on the social card

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Canonical site origin, without a trailing slash.
    pub site_base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Provider API key. Delivery falls back to log-only when absent.
    pub resend_api_key: Option<String>,
    /// Fixed recipient of contact-form submissions.
    pub contact_recipient: String,
    /// Sender address on relayed submissions.
    pub contact_from: String,
    /// Preorder page URL; the preorder call-to-action renders only when set.
    pub preorder_url: Option<String>,
    /// Font file for the social card's text layers.
    pub og_font_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let site_base_url = env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "https://www.jenzeradvisory.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let resend_api_key = env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty());

        let contact_recipient = env::var("CONTACT_RECIPIENT")
            .unwrap_or_else(|_| "gregor@jenzeradvisory.com".to_string());
        let contact_from = env::var("CONTACT_FROM")
            .unwrap_or_else(|_| "no-reply@jenzeradvisory.com".to_string());

        let preorder_url = env::var("PREORDER_URL").ok().filter(|u| !u.is_empty());

        let og_font_path = env::var("OG_FONT_PATH")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            site_base_url,
            log_level,
            log_format,
            resend_api_key,
            contact_recipient,
            contact_from,
            preorder_url,
            og_font_path,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `site_base_url` is not an absolute http(s) origin
    /// - `preorder_url` is set but not absolute
    /// - a contact address is not a plausible email
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.site_base_url.starts_with("http://") && !self.site_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "SITE_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.site_base_url
            );
        }

        if let Some(ref preorder_url) = self.preorder_url
            && !is_absolute_url(preorder_url)
        {
            anyhow::bail!(
                "PREORDER_URL must be an absolute http(s) URL, got '{}'",
                preorder_url
            );
        }

        for (name, address) in [
            ("CONTACT_RECIPIENT", &self.contact_recipient),
            ("CONTACT_FROM", &self.contact_from),
        ] {
            if !address.contains('@') {
                anyhow::bail!("{} must be an email address, got '{}'", name, address);
            }
        }

        Ok(())
    }

    /// Returns whether real mail delivery is enabled.
    pub fn is_delivery_enabled(&self) -> bool {
        self.resend_api_key.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Site base URL: {}", self.site_base_url);

        if self.is_delivery_enabled() {
            tracing::info!("  Mail delivery: enabled (Resend)");
        } else {
            tracing::info!("  Mail delivery: disabled (log-only)");
        }

        tracing::info!(
            "  Preorder action: {}",
            if self.preorder_url.is_some() {
                "enabled"
            } else {
                "hidden"
            }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Absolute http(s) or protocol-relative URL check used for outbound
/// configuration values.
fn is_absolute_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
