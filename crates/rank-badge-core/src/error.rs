//! 核心错误类型
//!
//! 资料抓取与 URL 构造过程中的错误分类。抓取类错误在 RankResolver 内部
//! 被吸收为默认段位，不会传播到 HTTP 调用方。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("无效的 URL: {0}")]
    InvalidUrl(String),

    #[error("资料页请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("资料页返回异常状态码: {status}")]
    UpstreamStatus { status: u16 },

    #[error("资料页中未找到段位数据片段")]
    FragmentNotFound,

    #[error("未知段位: {0}")]
    UnknownTier(String),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, CoreError>;

impl From<url::ParseError> for CoreError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl CoreError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            Self::FragmentNotFound => "FRAGMENT_NOT_FOUND",
            Self::UnknownTier(_) => "UNKNOWN_TIER",
        }
    }

    /// 资料查询指标中的 outcome 标签
    pub fn lookup_outcome(&self) -> &'static str {
        match self {
            Self::FragmentNotFound => "not_found",
            _ => "fetch_failed",
        }
    }
}
