//! Genome catalogue query service.
//!
//! A pass-through over [`GenomeRepository`]: the result set is returned
//! without filtering, reordering or caching. Data-access failures keep their
//! rendered message and are classified into domain error codes.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{GenomeQuery, GenomeRepository, GenomeRepositoryError};
use crate::domain::{Error, GenomeRecord};

/// Domain implementation of [`GenomeQuery`].
#[derive(Clone)]
pub struct GenomeQueryService {
    repository: Arc<dyn GenomeRepository>,
}

impl GenomeQueryService {
    /// Build the service over an explicit repository.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use luckygenome::domain::GenomeQueryService;
    /// use luckygenome::domain::ports::FixtureGenomeRepository;
    ///
    /// let _service = GenomeQueryService::new(Arc::new(FixtureGenomeRepository));
    /// ```
    pub fn new(repository: Arc<dyn GenomeRepository>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: GenomeRepositoryError) -> Error {
    debug!(%error, "genome repository call failed");
    let message = error.to_string();
    match error {
        GenomeRepositoryError::Connection { .. } => Error::service_unavailable(message),
        GenomeRepositoryError::Query { .. } => Error::internal(message),
    }
}

#[async_trait]
impl GenomeQuery for GenomeQueryService {
    async fn find_all(&self) -> Result<Vec<GenomeRecord>, Error> {
        self.repository.find_all().await.map_err(map_repository_error)
    }
}
