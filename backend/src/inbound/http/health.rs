//! Liveness and readiness probes for orchestrators and load balancers.
//!
//! ```text
//! GET /health/ready
//! GET /health/live
//! ```
//!
//! Probes never touch the genome store; they only report process state.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;

/// Process health flags shared by every worker.
#[derive(Debug)]
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Live but not yet ready.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the server as accepting traffic.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Fail liveness so orchestrators stop routing traffic during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether the readiness probe reports healthy.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Whether the liveness probe reports healthy.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}

#[derive(Debug, Serialize)]
struct ProbeBody {
    status: &'static str,
}

fn probe_response(healthy: bool) -> HttpResponse {
    let (mut builder, status) = if healthy {
        (HttpResponse::Ok(), "ok")
    } else {
        (HttpResponse::ServiceUnavailable(), "unavailable")
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ProbeBody { status })
}

/// Readiness probe: 200 once the listener is bound, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready())
}

/// Liveness probe: 200 while alive, 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn probe(state: HealthState, uri: &str) -> (StatusCode, Option<String>, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(ready)
                .service(live),
        )
        .await;
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = res.status();
        let cache_control = res
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body: Value = test::read_body_json(res).await;
        (status, cache_control, body)
    }

    #[rstest]
    #[case(false, StatusCode::SERVICE_UNAVAILABLE, "unavailable")]
    #[case(true, StatusCode::OK, "ok")]
    #[actix_web::test]
    async fn readiness_follows_the_ready_flag(
        #[case] mark_ready: bool,
        #[case] expected_status: StatusCode,
        #[case] expected_body: &str,
    ) {
        let state = HealthState::new();
        if mark_ready {
            state.mark_ready();
        }

        let (status, cache_control, body) = probe(state, "/health/ready").await;

        assert_eq!(status, expected_status);
        assert_eq!(cache_control.as_deref(), Some("no-store"));
        assert_eq!(body, json!({ "status": expected_body }));
    }

    #[actix_web::test]
    async fn liveness_fails_once_marked_unhealthy() {
        let state = HealthState::new();
        state.mark_unhealthy();

        let (status, _, _) = probe(state, "/health/live").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn liveness_does_not_wait_for_readiness() {
        let (status, _, _) = probe(HealthState::new(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }
}
