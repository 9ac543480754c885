//! Kaggle 段位徽章核心库
//!
//! 根据用户名抓取 Kaggle 主页上的段位（tier）和排名（rank），
//! 再生成对应的 shields.io 徽章地址。
//!
//! ## 模块结构
//!
//! - `tier`: 段位枚举及其颜色、图标表
//! - `resolver`: 资料页抓取与段位提取
//! - `url_builder`: 徽章地址构造
//! - `service`: 两步流程的组合入口
//! - `error`: 错误类型定义

pub mod error;
pub mod resolver;
pub mod service;
pub mod tier;
pub mod url_builder;

pub use error::{CoreError, Result};
pub use resolver::{
    HttpProfileFetcher, ProfileFetcher, ProfileLookup, RankResolver, extract_rank_fragment,
};
pub use service::{BadgeService, GeneratedBadge};
pub use tier::{DEFAULT_TIER, Tier, color_for, logo_for};
pub use url_builder::{BadgeRequest, BadgeUrlBuilder, LogoOption};
