//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(feature = "metrics")]
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use luckygenome::Trace;
#[cfg(debug_assertions)]
use luckygenome::doc::ApiDoc;
use luckygenome::domain::GenomeQueryService;
use luckygenome::domain::ports::{FixtureGenomeRepository, GenomeQuery, GenomeRepository};
use luckygenome::inbound::http::genomes::find_all;
use luckygenome::inbound::http::health::{HealthState, live, ready};
use luckygenome::inbound::http::index::index;
use luckygenome::inbound::http::state::HttpState;
use luckygenome::outbound::persistence::{DbPool, DieselGenomeRepository, run_pending_migrations};

/// Resolve settings into a [`ServerConfig`].
///
/// Applies pending migrations first when requested, then opens the pool.
/// Without a database URL the fixture store is used.
///
/// # Errors
/// Returns [`std::io::Error`] when the bind address is invalid, migrations
/// fail, or the pool cannot be built.
pub async fn build_config(settings: &ServerSettings) -> std::io::Result<ServerConfig> {
    let config = ServerConfig::new(settings.bind_addr()?);

    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; serving the fixture genome catalogue");
        return Ok(config);
    };

    if settings.run_migrations {
        let url = database_url.to_owned();
        let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
            .await
            .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
            .map_err(|err| std::io::Error::other(err.to_string()))?;
        info!(applied, "database migrations complete");
    }

    let pool = DbPool::new(settings.pool_config(database_url))
        .await
        .map_err(|err| std::io::Error::other(err.into_message()))?;
    Ok(config.with_db_pool(pool))
}

/// Pick the genome store and wrap it in the query service.
fn build_genome_query(db_pool: Option<DbPool>) -> Arc<dyn GenomeQuery> {
    let repository: Arc<dyn GenomeRepository> = match db_pool {
        Some(pool) => Arc::new(DieselGenomeRepository::new(pool)),
        None => Arc::new(FixtureGenomeRepository),
    };
    Arc::new(GenomeQueryService::new(repository))
}

#[cfg(feature = "metrics")]
fn build_metrics() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new("luckygenome")
        .endpoint("/metrics")
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(index)
        .service(find_all)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or configuring
/// metrics fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = web::Data::new(HttpState::new(build_genome_query(db_pool)));
    let server_health_state = health_state.clone();

    #[cfg(feature = "metrics")]
    let metrics = build_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics.clone());

        app
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "listening");
    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness and stop the server once Ctrl-C is received.
///
/// In-flight requests are allowed to finish before workers exit.
pub fn spawn_shutdown_watcher(health_state: web::Data<HealthState>, handle: ServerHandle) {
    actix_web::rt::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "shutdown signal listener failed");
            return;
        }
        drain(&health_state, handle).await;
    });
}

async fn drain(health_state: &HealthState, handle: ServerHandle) {
    info!("shutdown requested; draining connections");
    health_state.mark_unhealthy();
    handle.stop(true).await;
}
