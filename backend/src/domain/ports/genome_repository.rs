//! Driven port for reading the genome catalogue from the backing store.

use async_trait::async_trait;

use crate::domain::GenomeRecord;

use super::define_port_error;

define_port_error! {
    /// Data-access failures raised while reading genome records.
    pub enum GenomeRepositoryError {
        /// The store could not be reached or no connection was available.
        Connection => "genome store connection failed: {message}",
        /// The query failed during execution or row decoding.
        Query => "genome query failed: {message}",
    }
}

/// Port for the fixed, parameterless catalogue query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenomeRepository: Send + Sync {
    /// Return every stored genome record ordered by identifier.
    ///
    /// An empty store yields an empty vector rather than an error.
    async fn find_all(&self) -> Result<Vec<GenomeRecord>, GenomeRepositoryError>;
}

/// Fixture repository used when no database is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureGenomeRepository;

#[async_trait]
impl GenomeRepository for FixtureGenomeRepository {
    async fn find_all(&self) -> Result<Vec<GenomeRecord>, GenomeRepositoryError> {
        Ok(vec![GenomeRecord::new(1, "Alice")])
    }
}
