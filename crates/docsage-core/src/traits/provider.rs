//! Provider trait — the contract with the hosted language-model service.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Message, ProviderResponse};

/// Generation parameters passed with every chat request.
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// A hosted completion service. Constructed once per process and reused
/// across requests.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Provider identifier (e.g. "anthropic").
    fn name(&self) -> &str;

    /// Send a conversation and return the completion.
    async fn chat(
        &self,
        messages: &[Message],
        params: &GenerateParams,
    ) -> Result<ProviderResponse>;

    /// Cheap availability probe used at startup.
    async fn health_check(&self) -> Result<bool>;
}
