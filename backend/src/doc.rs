//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the schemas they return. The generated document backs Swagger UI in
//! debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, GenomeRecord};
use crate::inbound::http::schemas::FindAllResponseSchema;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lucky Genome API",
        description = "Genome catalogue lookup and health probes.",
        license(name = "MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::genomes::find_all,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(FindAllResponseSchema, GenomeRecord, Error, ErrorCode)),
    tags(
        (name = "index", description = "Landing page"),
        (name = "genomes", description = "Genome catalogue queries"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
