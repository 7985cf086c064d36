//! DocSage configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocSageConfig {
    #[serde(default = "default_provider")]
    pub default_provider: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub limits: LimitConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
}

fn default_provider() -> String { "anthropic".into() }
fn default_model() -> String { "claude-3-5-haiku-20241022".into() }
fn default_api_key() -> String { String::new() }
fn default_temperature() -> f32 { 0.3 }

impl Default for DocSageConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            default_model: default_model(),
            api_key: default_api_key(),
            default_temperature: default_temperature(),
            store: StoreConfig::default(),
            retrieval: RetrievalConfig::default(),
            limits: LimitConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

impl DocSageConfig {
    /// Load config from the default path (~/.docsage/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::DocSageError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::error::DocSageError::Config(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the DocSage home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".docsage")
    }
}

/// Document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_docs_dir() -> String { "~/.docsage/docs".into() }
fn default_extensions() -> Vec<String> {
    vec!["md", "txt"].into_iter().map(String::from).collect()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            docs_dir: default_docs_dir(),
            extensions: default_extensions(),
        }
    }
}

/// Retrieval tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// How many top-scoring chunks feed the context block.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Minimum-relevance threshold; chunks below it are discarded.
    #[serde(default = "default_min_score")]
    pub min_score: u32,
    /// Trimmed lines must exceed this many characters to become chunks.
    #[serde(default = "default_min_chunk_chars")]
    pub min_chunk_chars: usize,
}

fn default_top_k() -> usize { 3 }
fn default_min_score() -> u32 { 1 }
fn default_min_chunk_chars() -> usize { 40 }

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            min_score: default_min_score(),
            min_chunk_chars: default_min_chunk_chars(),
        }
    }
}

/// Request limits and generation budgets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitConfig {
    /// Prompts longer than this are rejected outright.
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,
    /// Prompts shorter than this get the small completion budget.
    #[serde(default = "default_short_prompt_chars")]
    pub short_prompt_chars: usize,
    #[serde(default = "default_short_max_tokens")]
    pub short_max_tokens: u32,
    #[serde(default = "default_long_max_tokens")]
    pub long_max_tokens: u32,
}

fn default_max_prompt_chars() -> usize { 500 }
fn default_short_prompt_chars() -> usize { 50 }
fn default_short_max_tokens() -> u32 { 120 }
fn default_long_max_tokens() -> u32 { 180 }

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: default_max_prompt_chars(),
            short_prompt_chars: default_short_prompt_chars(),
            short_max_tokens: default_short_max_tokens(),
            long_max_tokens: default_long_max_tokens(),
        }
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
    /// Allowed CORS origins; empty means permissive.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_port() -> u16 { 3000 }
fn default_host() -> String { "127.0.0.1".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            cors_origins: vec![],
        }
    }
}
