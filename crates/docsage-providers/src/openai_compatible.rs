//! Unified OpenAI-compatible provider.
//!
//! One struct handles chat completions for every registered endpoint.
//! Providers differ only in base URL, auth style, and API key source.
//! Anthropic endpoints take the system instruction as a top-level field
//! instead of a system message; the conversion happens here.

use async_trait::async_trait;
use serde_json::{Value, json};

use docsage_core::config::DocSageConfig;
use docsage_core::error::{DocSageError, Result};
use docsage_core::traits::provider::{GenerateParams, Provider};
use docsage_core::types::{Message, ProviderResponse, Role, Usage};

use crate::provider_registry::{AuthStyle, ProviderConfig};

/// A provider client for any OpenAI-compatible API.
pub struct OpenAiCompatibleProvider {
    name: String,
    api_key: String,
    base_url: String,
    chat_path: String,
    auth_style: AuthStyle,
    client: reqwest::Client,
}

impl OpenAiCompatibleProvider {
    /// Create from a registry entry + DocSage config.
    ///
    /// API key resolution: `config.api_key` > registry env vars > empty.
    /// Base URL resolution: env override > registry default.
    pub fn from_registry(registry: &ProviderConfig, config: &DocSageConfig) -> Self {
        let api_key = if !config.api_key.is_empty() {
            config.api_key.clone()
        } else {
            registry
                .env_keys
                .iter()
                .find_map(|key| std::env::var(key).ok())
                .unwrap_or_default()
        };

        let base_url = registry
            .base_url_env
            .and_then(|env_key| {
                let val = std::env::var(env_key).ok()?;
                // OLLAMA_HOST style overrides omit the /v1 suffix
                if val.ends_with("/v1") {
                    Some(val)
                } else {
                    Some(format!("{}/v1", val.trim_end_matches('/')))
                }
            })
            .unwrap_or_else(|| registry.base_url.to_string());

        Self {
            name: registry.name.to_string(),
            api_key,
            base_url,
            chat_path: registry.chat_path.to_string(),
            auth_style: registry.auth_style,
            client: reqwest::Client::new(),
        }
    }

    /// Create for a custom endpoint ("custom:https://my-server.com/v1").
    pub fn custom(endpoint: &str, config: &DocSageConfig) -> Self {
        let base_url = endpoint
            .strip_prefix("custom:")
            .unwrap_or(endpoint)
            .trim_end_matches('/')
            .to_string();

        let api_key = if !config.api_key.is_empty() {
            config.api_key.clone()
        } else {
            std::env::var("CUSTOM_API_KEY").unwrap_or_default()
        };

        let auth_style = if api_key.is_empty() {
            AuthStyle::None
        } else {
            AuthStyle::Bearer
        };

        Self {
            name: "custom".to_string(),
            api_key,
            base_url,
            chat_path: "/chat/completions".to_string(),
            auth_style,
            client: reqwest::Client::new(),
        }
    }

    fn apply_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_style {
            AuthStyle::Bearer if !self.api_key.is_empty() => {
                req.header("Authorization", format!("Bearer {}", self.api_key))
            }
            _ => req,
        }
    }

    fn build_body(&self, messages: &[Message], params: &GenerateParams) -> Value {
        let mut body = json!({
            "model": params.model,
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        let is_anthropic = self.name == "anthropic" || self.base_url.contains("anthropic");
        if is_anthropic {
            // Anthropic wants the system instruction as a top-level field
            let mut system_parts: Vec<&str> = Vec::new();
            let mut non_system: Vec<Value> = Vec::new();
            for msg in messages {
                if msg.role == Role::System {
                    system_parts.push(&msg.content);
                } else {
                    non_system.push(serde_json::to_value(msg).unwrap_or_default());
                }
            }
            if !system_parts.is_empty() {
                body["system"] = Value::String(system_parts.join("\n\n"));
            }
            body["messages"] = Value::Array(non_system);
        } else {
            body["messages"] = serde_json::to_value(messages).unwrap_or_default();
        }

        body
    }
}

#[async_trait]
impl Provider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn chat(
        &self,
        messages: &[Message],
        params: &GenerateParams,
    ) -> Result<ProviderResponse> {
        if self.auth_style != AuthStyle::None && self.api_key.is_empty() {
            return Err(DocSageError::ApiKeyMissing(self.name.clone()));
        }

        let body = self.build_body(messages, params);
        let url = format!("{}{}", self.base_url, self.chat_path);
        let req = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body);
        let req = self.apply_auth(req);

        let resp = req.send().await.map_err(|e| {
            DocSageError::Http(format!("{} connection failed ({url}): {e}", self.name))
        })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(DocSageError::Provider(format!(
                "{} API error {status}: {text}",
                self.name
            )));
        }

        let json: Value = resp
            .json()
            .await
            .map_err(|e| DocSageError::Http(e.to_string()))?;

        let choice = json["choices"]
            .get(0)
            .ok_or_else(|| DocSageError::Provider("no choices in response".into()))?;

        let content = choice["message"]["content"].as_str().map(String::from);
        let finish_reason = choice["finish_reason"].as_str().map(String::from);
        let usage = json["usage"].as_object().map(|u| Usage {
            prompt_tokens: u.get("prompt_tokens").and_then(|v| v.as_u64()).unwrap_or(0) as u32,
            completion_tokens: u
                .get("completion_tokens")
                .and_then(|v| v.as_u64())
                .unwrap_or(0) as u32,
            total_tokens: u.get("total_tokens").and_then(|v| v.as_u64()).unwrap_or(0) as u32,
        });

        tracing::debug!(provider = %self.name, finish_reason = ?finish_reason, "completion received");

        Ok(ProviderResponse {
            content,
            finish_reason,
            usage,
        })
    }

    async fn health_check(&self) -> Result<bool> {
        if self.auth_style != AuthStyle::None {
            // cloud providers: a set key is as far as a cheap probe goes
            return Ok(!self.api_key.is_empty());
        }

        // local servers: try to connect
        let url = format!("{}/models", self.base_url);
        let resp = self.client.get(&url).send().await;
        Ok(resp.is_ok())
    }
}
