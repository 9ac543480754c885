//! 路由与中间件装配

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, Uri},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use badge_shared::observability::middleware as obs_middleware;

use crate::error::WebError;
use crate::handlers::{generate, health, page, user};
use crate::state::AppState;

/// 业务路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/main", get(page::main_page))
        .route("/generate", post(generate::generate_badge))
        .route("/user/{username}", get(user::get_user_badge))
}

/// 组装完整应用：业务路由、探针、兜底 404 与公共中间件
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api_routes())
        .route("/health", get(health::health_check))
        .fallback(not_found)
        .layer(middleware::from_fn(security_headers))
        // 可观测性中间件：请求追踪和指标收集
        .layer(middleware::from_fn(obs_middleware::http_tracing))
        .layer(middleware::from_fn(obs_middleware::request_id))
        .with_state(state)
}

async fn not_found(uri: Uri) -> WebError {
    WebError::NotFound(uri.path().to_string())
}

/// 为所有响应注入 HTTP 安全头
async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("x-xss-protection", HeaderValue::from_static("0"));
    response
}
