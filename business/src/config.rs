use log::{debug, info, warn};
use serde::Deserialize;

/// Default Gemini REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model used for content analysis.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(String),
}

/// Settings for the remote analysis service.
///
/// The API key is optional. Without it every analysis degrades to the
/// fallback result, which keeps the rest of the app usable offline.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

// Intermediate struct so every variable can be absent.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    gemini_api_key: Option<String>,
    gemini_model: Option<String>,
    gemini_api_base_url: Option<String>,
}

impl BusinessConfig {
    /// Points the analyzer at `base_url` with a placeholder key. Meant for tests
    /// that run against a mock server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_key: Some("test-api-key".to_owned()),
            model: DEFAULT_MODEL.to_owned(),
            api_base_url: base_url.into(),
        }
    }

    /// Reads `GEMINI_API_KEY`, `GEMINI_MODEL` and `GEMINI_API_BASE_URL`,
    /// loading a `.env` file first when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {e}"),
        }

        let raw: RawConfig =
            serde_env::from_env().map_err(|e| ConfigError::Env(e.to_string()))?;
        let config = Self::from_raw(raw);

        if config.api_key.is_none() {
            warn!("GEMINI_API_KEY is not set, content analysis will use the fallback result");
        } else {
            info!("Content analysis uses model {}", config.model);
        }

        Ok(config)
    }

    fn from_raw(raw: RawConfig) -> Self {
        let non_empty = |value: Option<String>| {
            value
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        Self {
            api_key: non_empty(raw.gemini_api_key),
            model: non_empty(raw.gemini_model).unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            api_base_url: non_empty(raw.gemini_api_base_url)
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned()),
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.trim().is_empty());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Full URL of the `generateContent` call for the configured model.
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model
        )
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::from_raw(RawConfig::default())
    }
}
