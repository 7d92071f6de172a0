use crate::entity::{StoreDocument, TodoItem};
use std::future::Future;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Driven port for to-do persistence. Route handlers only speak to this trait, which
/// lets tests swap the file-backed adapter for an in-memory one.
pub trait TodoStore: Send + Sync + 'static {
    /// Produces the full store document. A missing or unreadable backing store reads as
    /// empty rather than surfacing an error.
    fn read_all(&self) -> impl Future<Output = StoreDocument> + Send;

    /// Replaces `username`'s entire list with `items`. The previous list for that user,
    /// if any, is discarded wholesale.
    fn write_user(
        &self,
        username: &str,
        items: Vec<TodoItem>,
    ) -> impl Future<Output = Result<(), StoreWriteError>> + Send;
}

/// Failure modes when rewriting the persisted document
#[derive(Debug, Error)]
pub enum StoreWriteError {
    #[error("could not serialize the store document")]
    Serialize(#[from] serde_json::Error),
    #[error("could not rewrite the store document on disk")]
    Io(#[from] std::io::Error),
}

/// Adapter which keeps the whole store document in a single JSON file on disk. Every
/// operation reads or rewrites the file in full.
pub struct FileTodoStore {
    path: PathBuf,
    // serializes read-modify-write cycles so two saves cannot drop each other's entries
    write_cycle: Mutex<()>,
}

impl FileTodoStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileTodoStore {
            path: path.into(),
            write_cycle: Mutex::new(()),
        }
    }

    /// Creates the backing file containing an empty document if nothing exists at the
    /// path yet. Existing content is left alone.
    pub async fn initialize(&self) -> Result<(), StoreWriteError> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }

        tokio::fs::write(&self.path, "{}").await?;
        info!(path = %self.path.display(), "created data storage file");
        Ok(())
    }
}

impl TodoStore for FileTodoStore {
    async fn read_all(&self) -> StoreDocument {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(read_err) => {
                warn!(
                    path = %self.path.display(),
                    error = %read_err,
                    "could not read data file, treating store as empty"
                );
                return StoreDocument::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(document) => document,
            Err(parse_err) => {
                warn!(
                    path = %self.path.display(),
                    error = %parse_err,
                    "data file held malformed JSON, treating store as empty"
                );
                StoreDocument::new()
            }
        }
    }

    async fn write_user(
        &self,
        username: &str,
        items: Vec<TodoItem>,
    ) -> Result<(), StoreWriteError> {
        let _guard = self.write_cycle.lock().await;

        let mut document = self.read_all().await;
        document.insert(username.to_owned(), items);

        let serialized = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(&self.path, serialized).await?;
        Ok(())
    }
}
