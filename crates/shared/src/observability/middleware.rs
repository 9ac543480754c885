//! HTTP 中间件
//!
//! 提供请求追踪、请求 ID 和指标收集的中间件。

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, info_span};

use super::metrics;

/// 请求 ID 响应头
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// 未命中任何路由时的指标 path 标签
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// HTTP 请求追踪和指标中间件
///
/// 为每个请求创建追踪 span 并记录指标。需通过 `Router::layer` 挂载，
/// 这样才能在路由匹配之后读到 [`MatchedPath`]。
///
/// # Example
///
/// ```ignore
/// use axum::{Router, middleware};
/// use badge_shared::observability::middleware::http_tracing;
///
/// let app = Router::new()
///     .route("/health", get(health))
///     .layer(middleware::from_fn(http_tracing));
/// ```
pub async fn http_tracing(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let uri = request.uri().path().to_string();
    let route = route_label(&request);

    let span = info_span!(
        "http_request",
        method = %method,
        uri = %uri,
        route = %route,
        status = tracing::field::Empty,
        latency_ms = tracing::field::Empty,
    );

    let start = Instant::now();

    let response = next.run(request).instrument(span.clone()).await;

    let latency = start.elapsed();
    let status = response.status().as_u16();

    span.record("status", status);
    span.record("latency_ms", latency.as_millis() as i64);

    metrics::record_http_request(&method, &route, status, latency.as_secs_f64());

    response
}

/// 指标使用的路由标签：命中的路由模板，未命中时统一为 [`UNMATCHED_ROUTE`]
fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

/// 请求 ID 中间件
///
/// 为每个请求添加唯一 ID，便于日志关联。
pub async fn request_id(mut request: Request, next: Next) -> Response {
    // 尝试从 header 获取请求 ID，没有则生成新的
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    request.extensions_mut().insert(RequestId(request_id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

/// 请求 ID 包装类型
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, middleware, routing::get};
    use tower::ServiceExt;

    fn test_app() -> Router {
        Router::new()
            .route("/user/{username}", get(|| async { "ok" }))
            .layer(middleware::from_fn(http_tracing))
            .layer(middleware::from_fn(request_id))
    }

    /// 与 http_tracing 挂在同一位置，把路由标签写回响应头
    async fn expose_route_label(request: Request, next: Next) -> Response {
        let label = route_label(&request);
        let mut response = next.run(request).await;
        response
            .headers_mut()
            .insert("x-route-label", HeaderValue::from_str(&label).unwrap());
        response
    }

    async fn label_for(path: &str) -> String {
        let app = Router::new()
            .route("/user/{username}", get(|| async { "ok" }))
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(middleware::from_fn(expose_route_label));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.headers()["x-route-label"]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_route_label_uses_route_template() {
        assert_eq!(label_for("/user/alice").await, "/user/{username}");
        assert_eq!(label_for("/user/bob").await, "/user/{username}");
    }

    #[tokio::test]
    async fn test_route_label_shared_by_unknown_paths() {
        let first = label_for("/x1").await;
        let second = label_for("/nope/deeper").await;
        assert_eq!(first, UNMATCHED_ROUTE);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_request_id_generated() {
        let response = test_app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/user/alice")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_request_id_propagated() {
        let response = test_app()
            .oneshot(
                axum::http::Request::builder()
                    .uri("/user/alice")
                    .header(REQUEST_ID_HEADER, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "req-123");
    }
}
