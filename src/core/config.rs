//! Application configuration management
//!
//! Configuration is assembled once at startup from an optional TOML file
//! and environment variable overrides, then carried as an immutable object
//! for the process lifetime. Missing NLU credentials are a handled,
//! non-fatal condition: the fallback tier is simply disabled.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default SentimentPredict endpoint for the embedded BERT service
const DEFAULT_BERT_URL: &str = "https://sn-watson-sentiment-bert.labs.skills.network/v1/watson.runtime.nlp.v1/NlpService/SentimentPredict";

/// Default model selector for the BERT service
const DEFAULT_BERT_MODEL_ID: &str = "sentiment_aggregated-bert-workflow_lang_multi_stock";

/// Default BERT request timeout in seconds
const DEFAULT_BERT_TIMEOUT: u64 = 10;

/// Default NLU request timeout in seconds
const DEFAULT_NLU_TIMEOUT: u64 = 30;

/// Default server port
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize)]
pub struct WatsonNluConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_nlu_timeout")]
    pub timeout: u64,
}

impl Default for WatsonNluConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            url: None,
            timeout: DEFAULT_NLU_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BertConfig {
    #[serde(default = "default_bert_url")]
    pub url: String,
    #[serde(default = "default_bert_model_id")]
    pub model_id: String,
    #[serde(default = "default_bert_timeout")]
    pub timeout: u64,
}

impl Default for BertConfig {
    fn default() -> Self {
        Self {
            url: default_bert_url(),
            model_id: default_bert_model_id(),
            timeout: DEFAULT_BERT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bert_url() -> String {
    DEFAULT_BERT_URL.to_string()
}

fn default_bert_model_id() -> String {
    DEFAULT_BERT_MODEL_ID.to_string()
}

fn default_bert_timeout() -> u64 {
    DEFAULT_BERT_TIMEOUT
}

fn default_nlu_timeout() -> u64 {
    DEFAULT_NLU_TIMEOUT
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub watson_nlu: WatsonNluConfig,
    #[serde(default)]
    pub bert: BertConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Application configuration, validated once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Watson NLU API key (fallback tier; optional)
    pub nlu_api_key: Option<String>,

    /// Watson NLU service instance URL (fallback tier; optional)
    pub nlu_url: Option<String>,

    /// NLU request timeout in seconds
    pub nlu_timeout: u64,

    /// BERT SentimentPredict endpoint URL (primary tier)
    pub bert_url: String,

    /// BERT model selector header value
    pub bert_model_id: String,

    /// BERT request timeout in seconds
    pub bert_timeout: u64,

    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logging level
    pub log_level: String,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if the TOML file cannot be read or parsed. Absent NLU
    /// credentials are not an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;

        let toml_config: TomlConfig =
            toml::from_str(&content).context("Failed to parse TOML configuration")?;

        Ok(Self::from_toml(toml_config))
    }

    /// Load configuration from the optional config file, then apply
    /// environment variable overrides
    ///
    /// Looks for the file named by `CONFIG_PATH` (default `config.toml`).
    /// A missing file is fine: defaults plus environment variables apply.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());

        let base = if Path::new(&config_path).exists() {
            Self::from_file(config_path)?
        } else {
            Self::from_toml(TomlConfig::default())
        };

        Ok(base.with_env_overrides())
    }

    fn from_toml(toml_config: TomlConfig) -> Self {
        Config {
            nlu_api_key: toml_config.watson_nlu.api_key,
            nlu_url: toml_config.watson_nlu.url,
            nlu_timeout: toml_config.watson_nlu.timeout,
            bert_url: toml_config.bert.url,
            bert_model_id: toml_config.bert.model_id,
            bert_timeout: toml_config.bert.timeout,
            host: toml_config.server.host,
            port: toml_config.server.port,
            log_level: toml_config.server.log_level,
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("WATSON_NLU_API_KEY") {
            self.nlu_api_key = Some(key);
        }
        if let Ok(url) = std::env::var("WATSON_NLU_URL") {
            self.nlu_url = Some(url);
        }
        if let Ok(url) = std::env::var("BERT_SERVICE_URL") {
            self.bert_url = url;
        }
        if let Ok(model_id) = std::env::var("BERT_MODEL_ID") {
            self.bert_model_id = model_id;
        }
        if let Ok(host) = std::env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            if let Ok(port) = port.parse() {
                self.port = port;
            }
        }
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            self.log_level = level;
        }
        self
    }

    /// NLU credentials, present only when both values are set and non-empty
    pub fn nlu_credentials(&self) -> Option<(String, String)> {
        match (&self.nlu_api_key, &self.nlu_url) {
            (Some(key), Some(url)) if !key.is_empty() && !url.is_empty() => {
                Some((key.clone(), url.clone()))
            }
            _ => None,
        }
    }

    /// Whether the NLU fallback tier is configured
    pub fn has_nlu_credentials(&self) -> bool {
        self.nlu_credentials().is_some()
    }
}
