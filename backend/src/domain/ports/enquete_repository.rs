//! Port abstraction for enquete persistence adapters and their errors.
//!
//! The [`EnqueteRepository`] trait is the store the validation service reads
//! before saving. Adapters own the atomic check-and-insert that backs mail
//! uniqueness: the service's existence lookup is a read, not a reservation,
//! so `insert` must refuse a duplicate mail on its own.

use async_trait::async_trait;

use crate::domain::{EnqueteId, FoodEnquete, StoredEnquete};

use super::define_port_error;

define_port_error! {
    /// Errors raised by enquete repository adapters.
    pub enum EnqueteRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Adapter-supplied detail.
            message: String,
        } => "enquete repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Adapter-supplied detail.
            message: String,
        } => "enquete repository query failed: {message}",
        /// Another stored enquete already uses this mail address.
        DuplicateMail {
            /// Conflicting mail address.
            mail: String,
        } => "mail address {mail} is already registered",
    }
}

/// Port for enquete storage and retrieval.
///
/// # Identifier Semantics
///
/// - Identifiers are assigned by the adapter on insert, starting at 1.
/// - Stored enquetes are never updated or removed through this port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnqueteRepository: Send + Sync {
    /// Whether any stored enquete uses exactly `mail`.
    async fn exists_by_mail(&self, mail: &str) -> Result<bool, EnqueteRepositoryError>;

    /// Store `enquete` and return it with its assigned identifier.
    ///
    /// Returns [`EnqueteRepositoryError::DuplicateMail`] when another stored
    /// enquete already uses the same mail, even if the caller's earlier
    /// lookup saw none.
    async fn insert(&self, enquete: &FoodEnquete) -> Result<StoredEnquete, EnqueteRepositoryError>;

    /// Fetch one stored enquete.
    async fn find_by_id(
        &self,
        id: EnqueteId,
    ) -> Result<Option<StoredEnquete>, EnqueteRepositoryError>;

    /// Every stored enquete in identifier order.
    async fn list_all(&self) -> Result<Vec<StoredEnquete>, EnqueteRepositoryError>;
}
