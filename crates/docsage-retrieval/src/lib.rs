//! # DocSage Retrieval
//!
//! Keyword-overlap retrieval over a small document corpus — no vector
//! DB, no embeddings, no persisted index.
//!
//! ## Flow
//! ```text
//! documents ──► chunker ──► chunks
//! query ──► keyword extractor ──► keywords
//! (keywords, chunks) ──► scorer ──► scored chunks (≥ min_score)
//! scored chunks ──► assembler ──► { context, sources }
//! ```
//!
//! Chunks are rebuilt fresh on every retrieval call; nothing is cached
//! across requests.

pub mod chunker;
pub mod context;
pub mod keywords;
pub mod score;
pub mod store;

pub use chunker::Chunk;
pub use context::RetrievalResult;
pub use score::ScoredChunk;
pub use store::FsDocumentStore;

use docsage_core::config::RetrievalConfig;
use docsage_core::types::Document;

/// Ties the retrieval stages together under one configuration.
#[derive(Debug, Clone)]
pub struct Retriever {
    top_k: usize,
    min_score: u32,
    min_chunk_chars: usize,
}

impl Retriever {
    pub fn new(config: &RetrievalConfig) -> Self {
        Self {
            top_k: config.top_k,
            min_score: config.min_score,
            min_chunk_chars: config.min_chunk_chars,
        }
    }

    /// Run the full pipeline for one query over a fresh document set.
    pub fn retrieve(&self, documents: &[Document], query: &str) -> RetrievalResult {
        let chunks = chunker::chunk_documents(documents, self.min_chunk_chars);
        let keywords = keywords::extract_keywords(query);
        let scored = score::score_chunks(&keywords, &chunks, self.min_score);
        tracing::debug!(
            chunks = chunks.len(),
            keywords = keywords.len(),
            matched = scored.len(),
            "retrieval pass"
        );
        context::assemble(scored, self.top_k)
    }
}
