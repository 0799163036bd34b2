//! Driving port for genome catalogue queries.
//!
//! HTTP handlers depend on this port rather than on persistence so they can
//! be exercised with in-memory implementations.

use async_trait::async_trait;

use crate::domain::{Error, GenomeRecord};

/// Use-case port returning the genome catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenomeQuery: Send + Sync {
    /// Return the full result set exactly as the store produced it.
    async fn find_all(&self) -> Result<Vec<GenomeRecord>, Error>;
}
