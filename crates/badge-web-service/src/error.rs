//! Web 服务错误类型定义

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rank_badge::CoreError;
use serde_json::json;

/// Web 服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("核心服务错误: {0}")]
    Core(#[from] CoreError),
    #[error("资源不存在: {0}")]
    NotFound(String),
}

impl WebError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Core(e) => e.code(),
            Self::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 服务端错误只返回通用提示，细节写日志
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "请求处理失败");
            "服务内部错误，请稍后重试".to_string()
        } else {
            self.to_string()
        };

        let body = json!({
            "success": false,
            "code": self.error_code(),
            "message": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, WebError>;
