mod handlers;
mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use claire_client::{AnswersClient, ApiConfig};
use std::sync::OnceLock;
use tower_http::cors::CorsLayer;

static ANSWERS_CLIENT: OnceLock<AnswersClient> = OnceLock::new();

/// The shared client, installed once at startup. Handlers reach it only
/// after their validation passes.
pub(crate) fn answers_client() -> &'static AnswersClient {
    ANSWERS_CLIENT.get().expect("answers client not initialized")
}

fn app() -> Router {
    Router::new()
        .route("/", get(handlers::home_page))
        .route("/run", post(handlers::run_home_query))
        .route("/answers", get(handlers::answers_page))
        .route("/answers/run", post(handlers::run_answers_query))
        .route("/about", get(handlers::about_page))
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    match ApiConfig::from_env() {
        Ok(config) => {
            ANSWERS_CLIENT.set(AnswersClient::new(config)).unwrap();
            println!("Answer client configured");
        }
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    }

    let bind_addr =
        std::env::var("CLAIRE_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn home_page_serves_the_form() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Document URL"));
        assert!(html.contains("Get Answers"));
    }

    #[tokio::test]
    async fn missing_inputs_render_validation_banner_without_any_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/run")
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from("url=&questions="))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Please provide both a URL and questions."));
    }

    #[tokio::test]
    async fn blank_question_lines_fail_validation() {
        let request = Request::builder()
            .method("POST")
            .uri("/answers/run")
            .header(
                header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(Body::from("documents=some+text&questions=%0A++%0A"))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Provide at least one question (one per line)."));
    }
}
