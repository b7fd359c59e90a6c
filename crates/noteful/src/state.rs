//! Application state with repository-based storage.
//!
//! Handlers receive a clone of [`AppState`] holding the repository trait
//! objects. The backend behind them is chosen by cargo feature.

use std::sync::Arc;

use noteful_core::storage::{FolderRepository, NoteRepository};

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub folder_repo: Arc<dyn FolderRepository>,
    pub note_repo: Arc<dyn NoteRepository>,
}

impl AppState {
    /// Creates an AppState serving both entities from one backend.
    fn build<R>(repo: Arc<R>) -> Self
    where
        R: FolderRepository + NoteRepository + 'static,
    {
        Self {
            folder_repo: repo.clone(),
            note_repo: repo,
        }
    }
}

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage at `config.sqlite_path`.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = SqliteRepository::new(&config.sqlite_path).await?;
            Ok(Self::build(Arc::new(repo)))
        }

        /// Fresh state backed by a private in-memory SQLite database.
        #[cfg(test)]
        pub async fn for_tests() -> Self {
            let repo = SqliteRepository::new_in_memory()
                .await
                .expect("in-memory SQLite should open");
            Self::build(Arc::new(repo))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage. Nothing is persisted.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::warn!("Using in-memory storage; data is lost on shutdown");
            Ok(Self::build(Arc::new(InMemoryRepository::new())))
        }

        #[cfg(test)]
        pub async fn for_tests() -> Self {
            Self::build(Arc::new(InMemoryRepository::new()))
        }
    }
}
