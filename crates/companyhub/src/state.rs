//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds repository trait objects so handlers never see
//! which storage backend the binary was built with.

use std::sync::Arc;

use companyhub_core::storage::{AddressRepository, CompanyRepository};

/// Shared application state.
///
/// This is cloned for each request handler. Both trait objects usually point
/// at the same backend instance.
#[derive(Clone)]
pub struct AppState {
    /// Company repository.
    pub company_repo: Arc<dyn CompanyRepository>,
    /// Address repository.
    pub address_repo: Arc<dyn AddressRepository>,
}

impl AppState {
    /// Creates AppState backed by a single repository implementing both traits.
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: CompanyRepository + AddressRepository + 'static,
    {
        Self {
            company_repo: repo.clone(),
            address_repo: repo,
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::config::Config;
    use crate::storage::sqlite::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = SqliteRepository::new(&config.sqlite_path, config.busy_timeout()).await?;

            tracing::info!(path = %config.sqlite_path, "Using SQLite storage");

            Ok(Self::from_repository(Arc::new(repo)))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::config::Config;
    use crate::storage::inmemory::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage, data is lost on restart");

            Ok(Self::from_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

#[cfg(test)]
impl AppState {
    /// Creates AppState with a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self::from_repository(Arc::new(crate::storage::inmemory::InMemoryRepository::new()))
    }
}
