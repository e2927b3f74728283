use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

const CONFIG_DIR: &str = "nina";
const CONFIG_FILE: &str = "config.json";
const PLACEHOLDER_KEY: &str = "your-openai-api-key-here";
const PLACEHOLDER_TOKEN: &str = "your-telegram-bot-token-here";

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ModelConfig {
    #[serde(default = "ModelConfig::default_name")]
    pub name: String,
    #[serde(default = "ModelConfig::default_temperature")]
    pub temperature: f32,
    #[serde(default = "ModelConfig::default_max_tokens")]
    pub max_tokens: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            temperature: Self::default_temperature(),
            max_tokens: Self::default_max_tokens(),
        }
    }
}

impl ModelConfig {
    fn default_name() -> String {
        "gpt-4o-mini".to_string()
    }

    const fn default_temperature() -> f32 {
        0.6
    }

    const fn default_max_tokens() -> usize {
        512
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: ProviderConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "ProviderConfig::default_base_url")]
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::default_base_url(),
        }
    }
}

impl ProviderConfig {
    fn default_base_url() -> String {
        "https://api.openai.com/v1".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TelegramConfig {
    #[serde(default)]
    pub token: String,
    #[serde(default = "TelegramConfig::default_delivery_timeout_secs")]
    pub delivery_timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            delivery_timeout_secs: Self::default_delivery_timeout_secs(),
        }
    }
}

impl TelegramConfig {
    const fn default_delivery_timeout_secs() -> u64 {
        20
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    /// Messages of conversation memory kept per chat
    #[serde(default = "SessionConfig::default_memory_limit")]
    pub memory_limit: usize,
    /// Entries per group shown by `/resumo`
    #[serde(default = "SessionConfig::default_summary_limit")]
    pub summary_limit: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            memory_limit: Self::default_memory_limit(),
            summary_limit: Self::default_summary_limit(),
        }
    }
}

impl SessionConfig {
    const fn default_memory_limit() -> usize {
        10
    }

    const fn default_summary_limit() -> usize {
        5
    }
}

impl Config {
    /// Load `~/nina/config.json` (if present) and apply environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILE);

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            info!("Loaded config from {}", config_path.display());
            Self::from_json(&content)?
        } else {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if config.providers.openai.api_key.is_empty() {
            anyhow::bail!(
                "OpenAI API key not configured. Set OPENAI_API_KEY or run 'nina init' and edit {}",
                config_path.display()
            );
        }

        Ok(config)
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Override secrets and model from environment variables.
    ///
    /// Placeholder values from the template count as unset.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup("OPENAI_API_KEY") {
            self.providers.openai.api_key = key;
        }
        if let Some(token) = lookup("TELEGRAM_BOT_TOKEN") {
            self.telegram.token = token;
        }
        if let Some(model) = lookup("NINA_MODEL") {
            self.model.name = model;
        }

        if self.providers.openai.api_key == PLACEHOLDER_KEY {
            self.providers.openai.api_key.clear();
        }
        if self.telegram.token == PLACEHOLDER_TOKEN {
            self.telegram.token.clear();
        }
    }

    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(&config_path, Self::template())?;
        info!("Created config file at {}", config_path.display());
        Ok(config_path)
    }

    #[must_use]
    pub fn template() -> String {
        format!(
            r#"{{
  "model": {{
    "name": "gpt-4o-mini",
    "temperature": 0.6,
    "max_tokens": 512
  }},
  "providers": {{
    "openai": {{
      "api_key": "{PLACEHOLDER_KEY}",
      "base_url": "https://api.openai.com/v1"
    }}
  }},
  "telegram": {{
    "token": "{PLACEHOLDER_TOKEN}",
    "delivery_timeout_secs": 20
  }},
  "session": {{
    "memory_limit": 10,
    "summary_limit": 5
  }}
}}"#
        )
    }
}
