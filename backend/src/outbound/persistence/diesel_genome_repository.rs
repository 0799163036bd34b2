//! PostgreSQL-backed genome catalogue adapter.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::GenomeRecord;
use crate::domain::ports::{GenomeRepository, GenomeRepositoryError};

use super::models::GenomeRow;
use super::pool::{DbPool, PoolError};
use super::schema::genomes;

/// Diesel-backed implementation of [`GenomeRepository`].
#[derive(Clone)]
pub struct DieselGenomeRepository {
    pool: DbPool,
}

impl DieselGenomeRepository {
    /// Create a repository over the given pool.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost/genomes")).await?;
    /// let repository = DieselGenomeRepository::new(pool);
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load_rows(
        conn: &mut AsyncPgConnection,
    ) -> Result<Vec<GenomeRow>, GenomeRepositoryError> {
        genomes::table
            .select(GenomeRow::as_select())
            .order_by(genomes::id.asc())
            .load(conn)
            .await
            .map_err(map_diesel_error)
    }
}

fn map_pool_error(error: PoolError) -> GenomeRepositoryError {
    GenomeRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: DieselError) -> GenomeRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "genome query failed");
        }
        other => debug!(error = %other, "genome query failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            GenomeRepositoryError::connection("database connection closed")
        }
        other => GenomeRepositoryError::query(other.to_string()),
    }
}

#[async_trait]
impl GenomeRepository for DieselGenomeRepository {
    async fn find_all(&self) -> Result<Vec<GenomeRecord>, GenomeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = Self::load_rows(&mut conn).await?;
        Ok(rows.into_iter().map(GenomeRecord::from).collect())
    }
}
