//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod enquete_repository;
mod message_catalog;

#[cfg(test)]
pub(crate) use enquete_repository::MockEnqueteRepository;
pub use enquete_repository::{EnqueteRepository, EnqueteRepositoryError};
pub use message_catalog::MessageCatalog;
