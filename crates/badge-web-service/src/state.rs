//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use badge_shared::config::AppConfig;
use rank_badge::BadgeService;

use crate::error::Result;
use crate::last_badge::LastBadgeSlot;

/// Axum 应用共享状态
#[derive(Clone)]
pub struct AppState {
    /// 段位解析与徽章生成
    pub service: BadgeService,
    /// 结果页展示的最近徽章
    pub last_badge: Arc<LastBadgeSlot>,
}

impl AppState {
    pub fn new(service: BadgeService, default_badge_url: &str) -> Self {
        Self {
            service,
            last_badge: Arc::new(LastBadgeSlot::new(default_badge_url)),
        }
    }

    /// 按配置创建，资料站或徽章服务地址无效时返回错误
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let service = BadgeService::from_config(&config.profile_site, &config.badge_service)?;
        Ok(Self::new(service, &config.badge_service.default_badge_url))
    }
}
