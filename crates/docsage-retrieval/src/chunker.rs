//! Paragraph-level document chunking.

use serde::{Deserialize, Serialize};

use docsage_core::types::Document;

/// A paragraph-sized retrievable unit derived from one source document.
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Parent document identifier.
    pub source: String,
    /// Trimmed paragraph text, always longer than the chunking minimum.
    pub text: String,
}

/// Split one document into chunks: one per line break, trimmed, keeping
/// only pieces whose trimmed length exceeds `min_chars`. A document with
/// no qualifying pieces contributes zero chunks.
pub fn chunk_document(doc: &Document, min_chars: usize) -> Vec<Chunk> {
    doc.text
        .split('\n')
        .map(str::trim)
        .filter(|piece| piece.chars().count() > min_chars)
        .map(|piece| Chunk {
            source: doc.source.clone(),
            text: piece.to_string(),
        })
        .collect()
}

/// Chunk a whole corpus, preserving document order then line order.
pub fn chunk_documents(docs: &[Document], min_chars: usize) -> Vec<Chunk> {
    docs.iter()
        .flat_map(|doc| chunk_document(doc, min_chars))
        .collect()
}
