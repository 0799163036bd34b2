//! Landing page.
//!
//! ```text
//! GET /
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

const LANDING_PAGE: &str = include_str!("../../../templates/index.html");

/// Serve the static landing view.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page", body = String, content_type = "text/html")
    ),
    tags = ["index"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_PAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};

    #[actix_web::test]
    async fn serves_html() {
        let app = test::init_service(App::new().service(index)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert!(content_type.starts_with("text/html"));
        let body = test::read_body(res).await;
        assert_eq!(body, LANDING_PAGE.as_bytes());
    }

    #[actix_web::test]
    async fn rejects_other_methods() {
        let app = test::init_service(App::new().service(index)).await;

        let res = test::call_service(&app, test::TestRequest::post().uri("/").to_request()).await;

        assert!(res.status().is_client_error());
    }
}
