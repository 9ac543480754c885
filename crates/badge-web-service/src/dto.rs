//! 请求与响应结构

use serde::{Deserialize, Serialize};

/// `GET /user/{username}` 响应体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserBadgeResponse {
    pub message: String,
    pub user_name: String,
    pub tier: String,
    pub rank: String,
    pub badge_url: String,
}

/// `POST /generate` 表单，缺失字段按空字符串处理
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateForm {
    pub username: String,
    pub style_options: String,
    pub logo_options: String,
}

/// 通用消息响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
