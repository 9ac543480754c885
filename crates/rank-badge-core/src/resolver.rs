//! 段位解析器
//!
//! 抓取 Kaggle 用户主页，从 `.kaggle-component` 内嵌的脚本数据中提取
//! `tier` 和 `rankCurrent`。该片段不保证是合法 JSON，只按正则匹配。
//!
//! 任何失败（网络错误、非 2xx 状态码、片段缺失）都降级为默认段位
//! `("novice", "")`，调用方始终拿到一个可用结果。

use std::sync::{Arc, LazyLock};
use std::time::Instant;

use async_trait::async_trait;
use badge_shared::config::ProfileSiteConfig;
use badge_shared::observability::metrics;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::{info, instrument, warn};
use url::Url;

use crate::error::{CoreError, Result};
use crate::tier::DEFAULT_TIER;

static COMPONENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".kaggle-component").expect("合法的 CSS 选择器"));

static RANK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""rankCurrent":([^,]+),"#).expect("合法的正则"));

static TIER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""tier":"([^,]+)","#).expect("合法的正则"));

/// 单次资料查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLookup {
    pub username: String,
    pub tier: String,
    pub rank: String,
}

impl ProfileLookup {
    /// 默认结果：novice 段位，排名为空
    pub fn fallback(username: &str) -> Self {
        Self {
            username: username.to_string(),
            tier: DEFAULT_TIER.to_string(),
            rank: String::new(),
        }
    }
}

/// 从资料页 HTML 中提取 `(tier, rank)`
///
/// 拼接所有 `.kaggle-component` 元素的文本后分别匹配
/// `"rankCurrent":<value>,` 和 `"tier":"<value>",`，任一缺失返回 None。
pub fn extract_rank_fragment(html: &str) -> Option<(String, String)> {
    let document = Html::parse_document(html);
    let text: String = document
        .select(&COMPONENT_SELECTOR)
        .flat_map(|element| element.text())
        .collect();

    let rank = RANK_PATTERN.captures(&text)?.get(1)?.as_str().to_string();
    let tier = TIER_PATTERN.captures(&text)?.get(1)?.as_str().to_string();

    Some((tier, rank))
}

/// 资料页获取接口
///
/// 生产实现为 [`HttpProfileFetcher`]，测试中可替换为 mock
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileFetcher: Send + Sync {
    /// 获取用户主页 HTML
    async fn fetch_profile(&self, username: &str) -> Result<String>;
}

/// 基于 reqwest 的资料页获取实现
#[derive(Debug, Clone)]
pub struct HttpProfileFetcher {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpProfileFetcher {
    /// 按配置构建 HTTP 客户端
    ///
    /// `timeout_seconds = 0` 时不设置请求超时
    pub fn new(config: &ProfileSiteConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::InvalidUrl(config.base_url.clone()));
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// 用户主页地址：`<base_url>/<username>`
    ///
    /// 用户名作为单个路径段追加并做转义
    pub fn profile_url(&self, username: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CoreError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(username);
        Ok(url)
    }
}

#[async_trait]
impl ProfileFetcher for HttpProfileFetcher {
    async fn fetch_profile(&self, username: &str) -> Result<String> {
        let url = self.profile_url(username)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

/// 段位解析器
///
/// 无状态，可在请求间共享
#[derive(Clone)]
pub struct RankResolver {
    fetcher: Arc<dyn ProfileFetcher>,
}

impl RankResolver {
    pub fn new(fetcher: Arc<dyn ProfileFetcher>) -> Self {
        Self { fetcher }
    }

    /// 使用 HTTP 实现创建解析器
    pub fn from_config(config: &ProfileSiteConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpProfileFetcher::new(config)?)))
    }

    /// 解析用户段位和排名
    ///
    /// 用户名为空时不发起请求；其余失败一律记录日志并返回默认值
    #[instrument(skip(self))]
    pub async fn resolve(&self, username: &str) -> ProfileLookup {
        if username.is_empty() {
            metrics::record_profile_lookup("skipped");
            return ProfileLookup::fallback(username);
        }

        match self.fetch_and_extract(username).await {
            Ok((tier, rank)) => {
                info!(username, tier = %tier, rank = %rank, "解析到用户段位");
                metrics::record_profile_lookup("found");
                ProfileLookup {
                    username: username.to_string(),
                    tier,
                    rank,
                }
            }
            Err(e) => {
                warn!(
                    username,
                    code = e.code(),
                    error = %e,
                    "获取用户段位失败，使用默认段位"
                );
                metrics::record_profile_lookup(e.lookup_outcome());
                ProfileLookup::fallback(username)
            }
        }
    }

    async fn fetch_and_extract(&self, username: &str) -> Result<(String, String)> {
        let start = Instant::now();
        let fetched = self.fetcher.fetch_profile(username).await;
        metrics::record_profile_fetch(fetched.is_ok(), start.elapsed().as_secs_f64());

        extract_rank_fragment(&fetched?).ok_or(CoreError::FragmentNotFound)
    }
}
