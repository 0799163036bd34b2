//! HTTP inbound adapter exposing REST endpoints.

pub mod envelope;
pub mod error;
pub mod genomes;
pub mod health;
pub mod index;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
