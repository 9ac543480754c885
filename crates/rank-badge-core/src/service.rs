//! 徽章生成服务
//!
//! 串联段位解析与 URL 构造，供 HTTP 层的两个入口共用。

use badge_shared::config::{BadgeServiceConfig, ProfileSiteConfig};
use tracing::instrument;

use crate::error::Result;
use crate::resolver::{ProfileLookup, RankResolver};
use crate::url_builder::{BadgeRequest, BadgeUrlBuilder, LogoOption};

/// 一次生成的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBadge {
    pub lookup: ProfileLookup,
    pub url: String,
}

/// 徽章生成服务
#[derive(Clone)]
pub struct BadgeService {
    resolver: RankResolver,
    builder: BadgeUrlBuilder,
}

impl BadgeService {
    pub fn new(resolver: RankResolver, builder: BadgeUrlBuilder) -> Self {
        Self { resolver, builder }
    }

    /// 按配置创建，基础地址无效时返回错误
    pub fn from_config(profile: &ProfileSiteConfig, badge: &BadgeServiceConfig) -> Result<Self> {
        Ok(Self::new(
            RankResolver::from_config(profile)?,
            BadgeUrlBuilder::new(&badge.base_url)?,
        ))
    }

    /// 解析段位并生成徽章地址
    ///
    /// 不会失败：抓取或解析出错时使用默认段位生成
    #[instrument(skip(self))]
    pub async fn generate(&self, username: &str, style: &str, logo: LogoOption) -> GeneratedBadge {
        let lookup = self.resolver.resolve(username).await;
        let url = self.builder.build(&BadgeRequest {
            username,
            tier: &lookup.tier,
            rank: &lookup.rank,
            style,
            logo,
        });

        GeneratedBadge { lookup, url }
    }
}
