//! In-memory storage backend.
//!
//! Stores all data in ordered maps behind a single `RwLock`. It enforces the
//! same constraints as the SQLite schema (unique names, length limits, owning
//! company must exist, cascading deletes, ids never reused) so handlers behave
//! the same against either backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use companyhub::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
