//! # DocSage Providers
//!
//! Language-model clients. Every supported service is OpenAI-compatible
//! at the wire level and handled by a single [`OpenAiCompatibleProvider`];
//! the registry maps provider names to endpoints and key sources.

pub mod openai_compatible;
pub mod provider_registry;

pub use openai_compatible::OpenAiCompatibleProvider;

use docsage_core::config::DocSageConfig;
use docsage_core::error::{DocSageError, Result};
use docsage_core::traits::Provider;

/// Create a provider from configuration.
///
/// `config.default_provider` selects a registry entry; the prefix form
/// `custom:<base_url>` escapes the registry for self-hosted endpoints.
pub fn create_provider(config: &DocSageConfig) -> Result<Box<dyn Provider>> {
    let name = config.default_provider.as_str();
    match name {
        other if other.starts_with("custom:") => Ok(Box::new(
            OpenAiCompatibleProvider::custom(other, config),
        )),
        _ => {
            let registry = provider_registry::get_provider_config(name)
                .ok_or_else(|| DocSageError::ProviderNotFound(name.into()))?;
            Ok(Box::new(OpenAiCompatibleProvider::from_registry(
                registry, config,
            )))
        }
    }
}

/// List all available provider names.
pub fn available_providers() -> Vec<&'static str> {
    let mut names = provider_registry::all_provider_names();
    names.push("custom");
    names
}
