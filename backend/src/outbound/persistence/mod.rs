//! Enquete persistence adapters.
//!
//! Two adapters implement [`crate::domain::ports::EnqueteRepository`]:
//!
//! - [`InMemoryEnqueteRepository`] keeps records in process memory and
//!   performs check-and-insert under a single write guard.
//! - [`DieselEnqueteRepository`] stores records in PostgreSQL via
//!   `diesel-async` with `bb8` pooling and relies on a unique index on
//!   `food_enquetes.mail`.
//!
//! Diesel row structs (`models.rs`) and table definitions (`schema.rs`) are
//! internal details and never reach the domain.
//!
//! # Example
//!
//! ```ignore
//! use enquete_backend::outbound::persistence::{DbPool, DieselEnqueteRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/enquete")).await?;
//! let repo = DieselEnqueteRepository::new(pool);
//! ```

mod diesel_enquete_repository;
mod memory_enquete_repository;
mod models;
mod pool;
mod schema;

pub use diesel_enquete_repository::DieselEnqueteRepository;
pub use memory_enquete_repository::InMemoryEnqueteRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
