//! Document store trait — the external read-only blob collection.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Document;

/// Source of raw documents. The core treats the listing as synchronous
/// and complete; pagination is the collaborator's concern.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store backend identifier (e.g. "fs").
    fn name(&self) -> &str;

    /// Fetch every document in the corpus.
    async fn list_documents(&self) -> Result<Vec<Document>>;
}
