use serde::Deserialize;
use std::path::Path;

use crate::error::CopilotError;
use crate::models::{DEFAULT_MODEL, ModelOption, default_models, find_model};
use crate::prompt::{ANNOTATION_PROMPT, MAX_NEW_TOKENS};

/// Environment variable holding the inference API token.
pub const TOKEN_ENV: &str = "HF_TOKEN";

/// Default hosted inference endpoint.
pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co";

/// Tunable, non-secret settings.
///
/// Every field has a default so a settings file may set only what it needs:
///
/// ```toml
/// default_model = "Qwen/Qwen2.5-Coder-1.5B-Instruct"
/// max_new_tokens = 1024
///
/// [[models]]
/// label = "Qwen/Qwen2.5-Coder-1.5B-Instruct"
/// description = "Qwen2.5 Coder 1.5B"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_model: String,
    pub max_new_tokens: u32,
    pub api_base: String,
    pub preamble: String,
    pub models: Vec<ModelOption>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_model: DEFAULT_MODEL.to_string(),
            max_new_tokens: MAX_NEW_TOKENS,
            api_base: DEFAULT_API_BASE.to_string(),
            preamble: ANNOTATION_PROMPT.to_string(),
            models: default_models(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let settings: Settings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub async fn load(path: &Path) -> anyhow::Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        let settings = Self::from_toml(&text)?;
        tracing::debug!(path = %path.display(), models = settings.models.len(), "loaded settings");
        Ok(settings)
    }

    /// Check that the catalog is usable.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.models.is_empty() {
            anyhow::bail!("settings list no models");
        }
        if find_model(&self.models, &self.default_model).is_none() {
            anyhow::bail!("default model {} is not in the catalog", self.default_model);
        }
        if self.max_new_tokens == 0 {
            anyhow::bail!("max_new_tokens must be positive");
        }
        Ok(())
    }
}

/// Everything a session needs to start.
#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub settings: Settings,
}

impl Config {
    /// Build a config from an optional token. An empty token counts as missing.
    pub fn new(token: Option<String>, settings: Settings) -> Result<Self, CopilotError> {
        match token {
            Some(token) if !token.trim().is_empty() => Ok(Self { token, settings }),
            _ => Err(CopilotError::MissingToken(TOKEN_ENV)),
        }
    }

    /// Read the token from [`TOKEN_ENV`].
    pub fn from_env(settings: Settings) -> Result<Self, CopilotError> {
        Self::new(std::env::var(TOKEN_ENV).ok(), settings)
    }

    /// Config for a session that never reaches the hosted backend. No token
    /// is read or required.
    pub fn offline(settings: Settings) -> Self {
        Self {
            token: String::new(),
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_token_is_rejected() {
        assert!(matches!(
            Config::new(None, Settings::default()),
            Err(CopilotError::MissingToken(TOKEN_ENV))
        ));
        assert!(Config::new(Some("  ".into()), Settings::default()).is_err());
    }

    #[test]
    fn offline_config_needs_no_token() {
        let cfg = Config::offline(Settings::default());
        assert!(cfg.token.is_empty());
        assert_eq!(cfg.settings.default_model, DEFAULT_MODEL);
    }

    #[test]
    fn token_is_kept() {
        let cfg = Config::new(Some("hf_abc".into()), Settings::default()).unwrap();
        assert_eq!(cfg.token, "hf_abc");
        assert_eq!(cfg.settings.max_new_tokens, MAX_NEW_TOKENS);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let s = Settings::from_toml("max_new_tokens = 12").unwrap();
        assert_eq!(s.max_new_tokens, 12);
        assert_eq!(s.default_model, DEFAULT_MODEL);
        assert_eq!(s.models.len(), 3);
        assert_eq!(s.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn default_model_must_be_listed() {
        let text = r#"
default_model = "nope/none"
"#;
        assert!(Settings::from_toml(text).is_err());
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(Settings::from_toml("models = []").is_err());
    }
}
