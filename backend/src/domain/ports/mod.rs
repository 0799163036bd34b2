//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod genome_query;
mod genome_repository;

#[cfg(test)]
pub use genome_query::MockGenomeQuery;
pub use genome_query::GenomeQuery;
#[cfg(test)]
pub use genome_repository::MockGenomeRepository;
pub use genome_repository::{FixtureGenomeRepository, GenomeRepository, GenomeRepositoryError};
