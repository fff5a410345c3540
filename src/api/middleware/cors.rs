use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS layer for the configured origins; an empty list allows any origin.
/// Unparseable origins are skipped.
pub fn create_cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.trim().parse::<HeaderValue>().ok())
        .collect();

    let origins = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("x-request-id"),
        ])
        .expose_headers([HeaderName::from_static("x-request-id")])
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(86400)) // 24 hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn preflight(allowed: &[String], origin: &'static str) -> Option<HeaderValue> {
        let app = Router::new()
            .route("/api/images", get(|| async { "[]" }))
            .layer(create_cors_layer(allowed));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/images")
                    .header("origin", origin)
                    .header("access-control-request-method", "GET")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .cloned()
    }

    #[tokio::test]
    async fn test_empty_list_allows_any_origin() {
        let allowed = preflight(&[], "https://shop.example.com").await;
        assert_eq!(allowed, Some(HeaderValue::from_static("*")));
    }

    #[tokio::test]
    async fn test_listed_origin_is_echoed() {
        let origins = vec!["https://shop.example.com".to_string()];
        let allowed = preflight(&origins, "https://shop.example.com").await;
        assert_eq!(
            allowed,
            Some(HeaderValue::from_static("https://shop.example.com"))
        );
    }

    #[tokio::test]
    async fn test_unlisted_origin_is_not_allowed() {
        let origins = vec!["https://shop.example.com".to_string()];
        assert_eq!(preflight(&origins, "https://evil.example.com").await, None);
    }
}
