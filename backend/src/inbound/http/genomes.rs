//! Genome catalogue HTTP handlers.
//!
//! ```text
//! POST /findAll
//! ```
//!
//! The request body is ignored. Successful responses always wrap the rows in
//! the standard envelope; failures are rendered by the error adapter and
//! never carry the envelope.

use actix_web::{post, web};
use tracing::debug;

use crate::domain::{Error, GenomeRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::ResponseEnvelope;
use crate::inbound::http::schemas::FindAllResponseSchema;
use crate::inbound::http::state::HttpState;

/// Return every genome record wrapped in a success envelope.
#[utoipa::path(
    post,
    path = "/findAll",
    responses(
        (status = 200, description = "All genome records", body = FindAllResponseSchema),
        (status = 500, description = "Query failed", body = Error),
        (status = 503, description = "Genome store unavailable", body = Error)
    ),
    tags = ["genomes"],
    operation_id = "findAll"
)]
#[post("/findAll")]
pub async fn find_all(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<ResponseEnvelope<Vec<GenomeRecord>>>> {
    let rows = state.genomes.find_all().await?;
    debug!(count = rows.len(), "genome catalogue served");
    Ok(web::Json(ResponseEnvelope::success(rows)))
}
