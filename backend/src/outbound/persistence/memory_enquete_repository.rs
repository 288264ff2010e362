//! Process-local `EnqueteRepository` implementation.
//!
//! Records live in a vector guarded by a Tokio `RwLock`. Identifiers are the
//! one-based insertion position. The duplicate-mail check and the push happen
//! under the same write guard, so concurrent saves of one mail cannot both
//! succeed.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{EnqueteRepository, EnqueteRepositoryError};
use crate::domain::{EnqueteId, FoodEnquete, StoredEnquete};

/// In-memory enquete store.
#[derive(Debug, Default)]
pub struct InMemoryEnqueteRepository {
    records: RwLock<Vec<StoredEnquete>>,
}

impl InMemoryEnqueteRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn uses_mail(stored: &StoredEnquete, mail: &str) -> bool {
    stored.enquete().mail.as_deref() == Some(mail)
}

fn next_id(len: usize) -> Result<EnqueteId, EnqueteRepositoryError> {
    let next = len
        .checked_add(1)
        .and_then(|next| i64::try_from(next).ok())
        .ok_or_else(|| EnqueteRepositoryError::query("enquete id space exhausted"))?;
    EnqueteId::new(next).map_err(|err| EnqueteRepositoryError::query(err.to_string()))
}

#[async_trait]
impl EnqueteRepository for InMemoryEnqueteRepository {
    async fn exists_by_mail(&self, mail: &str) -> Result<bool, EnqueteRepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().any(|stored| uses_mail(stored, mail)))
    }

    async fn insert(&self, enquete: &FoodEnquete) -> Result<StoredEnquete, EnqueteRepositoryError> {
        let mut records = self.records.write().await;
        if let Some(mail) = enquete.mail.as_deref() {
            if records.iter().any(|stored| uses_mail(stored, mail)) {
                return Err(EnqueteRepositoryError::duplicate_mail(mail));
            }
        }

        let stored = StoredEnquete::new(next_id(records.len())?, enquete.clone());
        records.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: EnqueteId,
    ) -> Result<Option<StoredEnquete>, EnqueteRepositoryError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|stored| stored.id() == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<StoredEnquete>, EnqueteRepositoryError> {
        Ok(self.records.read().await.clone())
    }
}
