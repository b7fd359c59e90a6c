//! In-memory storage backend.
//!
//! Stores both tables in ordered maps behind a `tokio::sync::RwLock`. Used
//! for development without a database file and by the repository tests.

mod repository;

pub use repository::InMemoryRepository;
