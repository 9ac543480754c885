//! 存活探针与根路径

use axum::Json;

use crate::dto::MessageResponse;

/// 根路径问候
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "hello world".to_string(),
    })
}

/// 存活探针：服务进程正常即返回 ok
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "badge-web-service"
    }))
}
