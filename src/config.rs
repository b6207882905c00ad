//! Gateway configuration
//!
//! Settings resolve in three layers: built-in defaults, then an
//! optional config file at `~/.config/optic/config.toml`, then
//! environment variables. The environment wins, matching how the
//! gateway is deployed (PORT and ANTHROPIC_API_KEY injected by the
//! host).

use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Default Anthropic API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Default verification model
pub const DEFAULT_MODEL: &str = "claude-haiku-4-5";

/// Gateway settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Port to listen on
    pub port: u16,
    /// Number of HTTP worker threads
    pub workers: usize,
    /// Anthropic API key (required to start)
    pub api_key: Option<String>,
    /// Model used for verification
    pub model: String,
    /// Maximum output tokens per verification
    pub max_tokens: u32,
    /// Base URL of the model API
    pub base_url: String,
    /// Model request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 3000,
            workers: 4,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 256,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Settings {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("optic").join("config.toml")
    }

    /// Load settings: defaults, then config file, then environment
    #[must_use]
    pub fn load() -> Self {
        let mut settings = Self::from_file().unwrap_or_default();
        settings.apply_env();
        settings
    }

    /// Load from the config file if it exists and parses
    fn from_file() -> Option<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return None;
        }
        fs::read_to_string(&path).ok().and_then(|content| toml::from_str(&content).ok())
    }

    /// Overlay environment variables onto these settings
    pub fn apply_env(&mut self) {
        if let Some(port) = env_parse("PORT") {
            self.port = port;
        }
        if let Ok(key) = std::env::var("ANTHROPIC_API_KEY")
            && !key.is_empty()
        {
            self.api_key = Some(key);
        }
        if let Ok(model) = std::env::var("ANTHROPIC_MODEL")
            && !model.is_empty()
        {
            self.model = model;
        }
        if let Ok(url) = std::env::var("ANTHROPIC_BASE_URL")
            && !url.is_empty()
        {
            self.base_url = url;
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}
