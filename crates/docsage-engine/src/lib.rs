//! # DocSage Engine
//!
//! The answer pipeline: screen the prompt, retrieve context, call the
//! model, gate the citations. One request runs to completion before the
//! next and the engine holds no mutable state between calls.
//!
//! ```text
//! prompt ─► guards ─► retrieval ─► system prompt ─► provider ─► gate ─► reply
//!             │            │
//!             └ greeting   └ empty context → fixed "don't know" reply
//! ```

pub mod gate;
pub mod guard;

use std::time::Instant;

use serde::Serialize;

use docsage_core::config::{DocSageConfig, LimitConfig};
use docsage_core::error::{DocSageError, Result};
use docsage_core::traits::provider::{GenerateParams, Provider};
use docsage_core::traits::DocumentStore;
use docsage_core::types::Message;
use docsage_retrieval::Retriever;

/// Reply for questions the corpus cannot ground.
pub const NO_CONTEXT_REPLY: &str = "I don't know based on the provided context.";

/// The caller-facing answer. Field names match the service's JSON wire
/// format.
#[derive(Debug, Clone, Serialize)]
pub struct AskReply {
    pub prompt: String,
    pub response: String,
    pub rag_used: bool,
    pub sources: Vec<String>,
    pub latency_ms: u64,
}

/// Answers questions against the document corpus via the configured
/// provider. Construct once per process and reuse across requests.
pub struct AnswerEngine {
    provider: Box<dyn Provider>,
    store: Box<dyn DocumentStore>,
    retriever: Retriever,
    limits: LimitConfig,
    model: String,
    temperature: f32,
}

impl AnswerEngine {
    pub fn new(
        config: &DocSageConfig,
        provider: Box<dyn Provider>,
        store: Box<dyn DocumentStore>,
    ) -> Self {
        Self {
            provider,
            store,
            retriever: Retriever::new(&config.retrieval),
            limits: config.limits.clone(),
            model: config.default_model.clone(),
            temperature: config.default_temperature,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Run one full question-answering cycle.
    pub async fn ask(&self, prompt: &str, request_id: &str) -> Result<AskReply> {
        let started = Instant::now();

        let query = match guard::screen_prompt(prompt, &self.limits)? {
            guard::Screen::Greeting => {
                tracing::info!(request_id, event = "early_exit", reason = "greeting");
                return Ok(reply(
                    prompt.trim(),
                    guard::GREETING_REPLY.into(),
                    vec![],
                    started,
                ));
            }
            guard::Screen::Query(q) => q,
        };

        let documents = self.store.list_documents().await?;
        let retrieved = self.retriever.retrieve(&documents, &query);
        tracing::info!(
            request_id,
            event = "retrieval",
            documents = documents.len(),
            sources = retrieved.sources.len(),
            context_chars = retrieved.context.len(),
        );

        if retrieved.is_empty() {
            return Ok(reply(&query, NO_CONTEXT_REPLY.into(), vec![], started));
        }

        let max_tokens = guard::max_tokens_for(&query, &self.limits);
        let params = GenerateParams {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens,
        };
        let messages = vec![
            Message::system(&system_prompt(&retrieved.context)),
            Message::user(&query),
        ];

        tracing::info!(
            request_id,
            event = "model_call",
            prompt_chars = query.chars().count(),
            max_tokens,
        );
        let completion = self.provider.chat(&messages, &params).await?;
        let answer = completion
            .content
            .ok_or_else(|| DocSageError::Provider("empty completion content".into()))?;

        let sources = if gate::answer_is_grounded(&answer) {
            retrieved.sources
        } else {
            tracing::info!(request_id, event = "sources_suppressed");
            vec![]
        };

        let out = reply(&query, answer, sources, started);
        tracing::info!(request_id, event = "request_complete", latency_ms = out.latency_ms);
        Ok(out)
    }
}

fn reply(prompt: &str, response: String, sources: Vec<String>, started: Instant) -> AskReply {
    AskReply {
        prompt: prompt.to_string(),
        rag_used: !sources.is_empty(),
        response,
        sources,
        latency_ms: started.elapsed().as_millis() as u64,
    }
}

/// System instruction with the context block embedded verbatim.
fn system_prompt(context: &str) -> String {
    format!(
        "You are a concise technical assistant. Answer using the provided \
         context. If the answer is not in the context, say you don't know.\n\n\
         Context:\n{context}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use docsage_core::types::{Document, ProviderResponse};

    struct ScriptedProvider {
        answer: String,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl Provider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn chat(
            &self,
            _messages: &[Message],
            _params: &GenerateParams,
        ) -> docsage_core::error::Result<ProviderResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ProviderResponse {
                content: Some(self.answer.clone()),
                finish_reason: Some("stop".into()),
                usage: None,
            })
        }

        async fn health_check(&self) -> docsage_core::error::Result<bool> {
            Ok(true)
        }
    }

    struct StaticStore {
        docs: Vec<Document>,
    }

    #[async_trait]
    impl DocumentStore for StaticStore {
        fn name(&self) -> &str {
            "static"
        }

        async fn list_documents(&self) -> docsage_core::error::Result<Vec<Document>> {
            Ok(self.docs.clone())
        }
    }

    fn engine_with(answer: &str, docs: Vec<Document>) -> (AnswerEngine, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let provider = ScriptedProvider {
            answer: answer.into(),
            calls: calls.clone(),
        };
        let engine = AnswerEngine::new(
            &DocSageConfig::default(),
            Box::new(provider),
            Box::new(StaticStore { docs }),
        );
        (engine, calls)
    }

    fn lambda_doc() -> Document {
        Document {
            source: "doc1".into(),
            text: "AWS Lambda is a serverless compute service that runs code in response to events."
                .into(),
        }
    }

    #[tokio::test]
    async fn test_grounded_question_cites_its_source() {
        let (engine, calls) = engine_with(
            "Lambda is a serverless compute service.",
            vec![lambda_doc()],
        );
        let result = engine.ask("What is Lambda?", "req-a").await.unwrap();
        assert_eq!(result.sources, vec!["doc1"]);
        assert!(result.rag_used);
        assert_eq!(result.response, "Lambda is a serverless compute service.");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_greeting_skips_retrieval_and_model() {
        let (engine, calls) = engine_with("unused", vec![lambda_doc()]);
        let result = engine.ask("Hello", "req-b").await.unwrap();
        assert_eq!(result.response, guard::GREETING_REPLY);
        assert!(!result.rag_used);
        assert!(result.sources.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_prompt_is_a_validation_error() {
        let (engine, calls) = engine_with("unused", vec![lambda_doc()]);
        let err = engine.ask("", "req-c").await.unwrap_err();
        assert!(matches!(err, DocSageError::InvalidPrompt(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generic_query_returns_no_context_reply() {
        let (engine, calls) = engine_with("unused", vec![lambda_doc()]);
        let result = engine.ask("what is aws", "req-d").await.unwrap();
        assert_eq!(result.response, NO_CONTEXT_REPLY);
        assert!(!result.rag_used);
        assert!(result.sources.is_empty());
        // no model call when retrieval comes back empty
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unsupported_answer_suppresses_sources() {
        let (engine, calls) = engine_with("I don't know the answer", vec![lambda_doc()]);
        let result = engine.ask("What is Lambda?", "req-e").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(result.sources.is_empty());
        assert!(!result.rag_used);
        assert_eq!(result.response, "I don't know the answer");
    }

    #[tokio::test]
    async fn test_store_failure_is_not_a_client_error() {
        struct FailingStore;

        #[async_trait]
        impl DocumentStore for FailingStore {
            fn name(&self) -> &str {
                "failing"
            }
            async fn list_documents(&self) -> docsage_core::error::Result<Vec<Document>> {
                Err(DocSageError::Store("bucket unavailable".into()))
            }
        }

        let provider = ScriptedProvider {
            answer: "unused".into(),
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let engine = AnswerEngine::new(
            &DocSageConfig::default(),
            Box::new(provider),
            Box::new(FailingStore),
        );
        let err = engine.ask("What is Lambda?", "req-f").await.unwrap_err();
        assert!(matches!(err, DocSageError::Store(_)));
    }
}
