//! Filesystem-backed document store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use docsage_core::config::StoreConfig;
use docsage_core::error::{DocSageError, Result};
use docsage_core::traits::DocumentStore;
use docsage_core::types::Document;

/// Reads every matching file in one directory; the file name is the
/// document identifier. Documents are re-read on every call so corpus
/// edits show up without a restart.
pub struct FsDocumentStore {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FsDocumentStore {
    pub fn new(root: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            root: root.into(),
            extensions,
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        let root = shellexpand::tilde(&config.docs_dir).to_string();
        Self::new(PathBuf::from(root), config.extensions.clone())
    }

    fn wants(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|want| want.eq_ignore_ascii_case(ext))
            })
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    fn name(&self) -> &str {
        "fs"
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        let mut entries = tokio::fs::read_dir(&self.root).await.map_err(|e| {
            DocSageError::Store(format!("cannot read docs dir {}: {e}", self.root.display()))
        })?;

        let mut paths = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DocSageError::Store(e.to_string()))?
        {
            let path = entry.path();
            if path.is_file() && self.wants(&path) {
                paths.push(path);
            }
        }
        // deterministic document iteration order
        paths.sort();

        let mut documents = Vec::with_capacity(paths.len());
        for path in paths {
            let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
                DocSageError::Store(format!("cannot read {}: {e}", path.display()))
            })?;
            let source = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            documents.push(Document { source, text });
        }

        Ok(documents)
    }
}
