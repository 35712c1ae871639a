//! Server state and configuration.

use std::path::PathBuf;
use std::sync::Arc;
use subtle::ConstantTimeEq;

use crate::error::DotcalError;
use crate::progress::Clock;
use crate::render::FontSet;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:3000")
    pub listen_addr: String,
    /// Shared key required by `/days`. When unset, `/days` always answers 401.
    pub days_secret: Option<String>,
    /// Directory holding the role fonts. `None` uses the built-in bitmap font.
    pub fonts_dir: Option<PathBuf>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// Source of the render date.
    pub clock: Clock,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            days_secret: None,
            fonts_dir: None,
            static_dir: PathBuf::from("public"),
            clock: Clock::Local,
        }
    }
}

/// Application state shared across handlers. Built once at startup and
/// never mutated.
pub struct AppState {
    pub config: ServerConfig,
    pub fonts: Arc<FontSet>,
    /// Client for background image downloads.
    pub http_client: reqwest::Client,
}

impl AppState {
    /// Build state from configuration, loading fonts from disk.
    ///
    /// A configured font directory that cannot be loaded is an error.
    pub fn new(config: ServerConfig) -> Result<Self, DotcalError> {
        let fonts = FontSet::from_option(config.fonts_dir.as_deref())?;
        Self::with_fonts(config, fonts)
    }

    /// Build state around an already loaded font set.
    pub fn with_fonts(config: ServerConfig, fonts: FontSet) -> Result<Self, DotcalError> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("dotcal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DotcalError::Transport(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            config,
            fonts: Arc::new(fonts),
            http_client,
        })
    }

    /// Whether `key` matches the configured `/days` secret. The comparison
    /// runs in constant time for keys of the secret's length.
    pub fn is_authorized(&self, key: Option<&str>) -> bool {
        match (self.config.days_secret.as_deref(), key) {
            (Some(secret), Some(key)) if !secret.is_empty() => {
                bool::from(secret.as_bytes().ct_eq(key.as_bytes()))
            }
            _ => false,
        }
    }
}
