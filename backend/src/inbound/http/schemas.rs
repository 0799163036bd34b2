//! OpenAPI schema definitions for generic response bodies.
//!
//! `ResponseEnvelope<T>` is generic and serde-only; the concrete shape
//! returned by each endpoint is registered here for documentation.

use utoipa::ToSchema;

use crate::domain::GenomeRecord;

/// OpenAPI schema for the `POST /findAll` success body.
#[derive(ToSchema)]
#[schema(as = FindAllResponse, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FindAllResponseSchema {
    /// Always `S0001` on success.
    #[schema(example = "S0001")]
    result_code: String,
    /// Genome records ordered by identifier.
    res: Vec<GenomeRecord>,
}
