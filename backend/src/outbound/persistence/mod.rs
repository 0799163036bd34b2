//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate Diesel rows into domain types and map Diesel and
//! pool failures into port errors; no business logic lives here. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module.
//!
//! # Example
//!
//! ```ignore
//! use luckygenome::outbound::persistence::{DbPool, DieselGenomeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/genomes")).await?;
//! let repository = DieselGenomeRepository::new(pool);
//! ```

mod diesel_genome_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_genome_repository::DieselGenomeRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
