//! Kaggle 段位徽章 Web 服务
//!
//! 对外提供段位查询 JSON 接口、徽章生成表单和结果页面。
//!
//! ## 模块结构
//!
//! - `routes`: 路由与中间件装配
//! - `handlers`: 各接口处理函数
//! - `state`: 路由共享状态
//! - `last_badge`: 最近一次生成的徽章地址
//! - `templates`: 页面渲染
//! - `dto`: 请求与响应结构
//! - `error`: 错误类型定义

pub mod dto;
pub mod error;
pub mod handlers;
pub mod last_badge;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::{Result, WebError};
pub use last_badge::{LastBadge, LastBadgeSlot};
pub use routes::build_app;
pub use state::AppState;
