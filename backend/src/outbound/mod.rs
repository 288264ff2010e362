//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: in-memory and PostgreSQL (Diesel) enquete stores
//! - **locale**: message catalogues bundled with the crate
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business rules beyond the uniqueness
//! guarantee the persistence port requires of `insert`.

pub mod locale;
pub mod persistence;
