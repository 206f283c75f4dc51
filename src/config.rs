//! Configuration for the Gemini-backed analysis client

use crate::error::{EmofindError, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_MS: u64 = 20_000;
const MAX_TIMEOUT_MS: u64 = 120_000;

/// Connection settings for the Gemini generateContent endpoint.
///
/// Built explicitly by callers (tests inject fake keys and endpoints) or
/// loaded from the environment with [`GeminiConfig::load_from_env`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout_ms: u64,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// `GEMINI_API_KEY` is required; `GEMINI_MODEL`, `GEMINI_BASE_URL` and
    /// `GEMINI_TIMEOUT_MS` override the defaults when set.
    pub fn load_from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(EmofindError::Config {
                message: "GEMINI_API_KEY is not set".to_string(),
            });
        }

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("GEMINI_MODEL")
            && !model.trim().is_empty()
        {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL")
            && !base_url.trim().is_empty()
        {
            config.base_url = base_url;
        }
        if let Some(timeout_ms) = std::env::var("GEMINI_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.timeout_ms = timeout_ms;
        }
        config.clamp_timeout();
        Ok(config)
    }

    // Out-of-range timeouts are clamped rather than failing startup
    fn clamp_timeout(&mut self) {
        if self.timeout_ms == 0 {
            self.timeout_ms = DEFAULT_TIMEOUT_MS;
        } else if self.timeout_ms > MAX_TIMEOUT_MS {
            tracing::warn!(
                "GEMINI_TIMEOUT_MS {} exceeds max {}, clamping",
                self.timeout_ms,
                MAX_TIMEOUT_MS
            );
            self.timeout_ms = MAX_TIMEOUT_MS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_defaults() {
        let cfg = GeminiConfig::new("k")
            .with_model("gemini-2.5-flash")
            .with_base_url("http://127.0.0.1:8099")
            .with_timeout_ms(5_000);
        assert_eq!(cfg.model, "gemini-2.5-flash");
        assert_eq!(cfg.base_url, "http://127.0.0.1:8099");
        assert_eq!(cfg.timeout_ms, 5_000);
    }

    #[test]
    fn test_zero_timeout_clamped_to_default() {
        let mut cfg = GeminiConfig::new("k").with_timeout_ms(0);
        cfg.clamp_timeout();
        assert_eq!(cfg.timeout_ms, 20_000);
    }

    #[test]
    fn test_oversized_timeout_clamped_to_max() {
        let mut cfg = GeminiConfig::new("k").with_timeout_ms(10_000_000);
        cfg.clamp_timeout();
        assert_eq!(cfg.timeout_ms, 120_000);
    }
}
