//! Profile Store: pluggable, trait-based storage for saved profiles.
//!
//! Default: `InMemoryProfileStore` (lives as long as the process, nothing is persisted).
//!
//! `AppState` holds an `Arc<dyn ProfileStore>`.

use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::profile::ProfileRecord;

/// Storage backend for profiles. No delete or list operation.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Inserts `record` under its email, replacing any existing record whole.
    /// Returns the record that was replaced, if any.
    async fn upsert(&self, record: ProfileRecord) -> Result<Option<ProfileRecord>, AppError>;

    async fn get(&self, email: &str) -> Result<Option<ProfileRecord>, AppError>;
}

/// Email-keyed map behind one lock. The write lock covers the whole
/// insert, so two saves to the same email can never interleave.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<String, ProfileRecord>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn upsert(&self, record: ProfileRecord) -> Result<Option<ProfileRecord>, AppError> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        Ok(profiles.insert(record.email.clone(), record))
    }

    async fn get(&self, email: &str) -> Result<Option<ProfileRecord>, AppError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|_| anyhow!("profile store lock poisoned"))?;
        Ok(profiles.get(email).cloned())
    }
}
