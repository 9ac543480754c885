//! 徽章 URL 构造
//!
//! 按 shields.io 静态徽章约定生成地址：
//! `<base>/Kaggle-<tier>, <rank>-0?color=<hex>[&logo=<data uri>]&style=<style>`
//!
//! 路径段用 `urlencoding` 转义（`,` → `%2C`，空格 → `%20`），
//! 查询参数按 `application/x-www-form-urlencoded` 编码。

use badge_shared::observability::metrics;
use tracing::debug;
use url::Url;

use crate::error::{CoreError, Result};
use crate::tier;

/// 徽章左侧文字
const SUBJECT: &str = "Kaggle";

/// 是否在徽章中嵌入段位图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoOption {
    On,
    #[default]
    Off,
}

impl LogoOption {
    /// 解析表单取值，只有 "On" 表示开启
    pub fn from_form(value: &str) -> Self {
        if value == "On" { Self::On } else { Self::Off }
    }

    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

/// 单次徽章生成请求
#[derive(Debug, Clone, Copy)]
pub struct BadgeRequest<'a> {
    pub username: &'a str,
    pub tier: &'a str,
    pub rank: &'a str,
    pub style: &'a str,
    pub logo: LogoOption,
}

/// 徽章 URL 构造器
#[derive(Debug, Clone)]
pub struct BadgeUrlBuilder {
    base_url: Url,
}

impl BadgeUrlBuilder {
    /// 校验徽章服务基础地址
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(CoreError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { base_url })
    }

    /// 生成徽章地址
    ///
    /// 未知段位时 color 为空且不带 logo，不会失败
    pub fn build(&self, request: &BadgeRequest<'_>) -> String {
        let color = tier::color_for(request.tier);
        let logo = request
            .logo
            .is_on()
            .then(|| tier::logo_for(request.tier))
            .flatten();

        let label = format!("{}, {}", request.tier, request.rank);
        let segment = format!("{}-{}-0", SUBJECT, urlencoding::encode(&label));

        let mut url = self.base_url.clone();
        let path = format!("{}/{}", url.path().trim_end_matches('/'), segment);
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("color", color.unwrap_or_default());
            if let Some(logo) = logo {
                query.append_pair("logo", logo);
            }
            query.append_pair("style", request.style);
        }

        metrics::record_badge_url(color.is_some(), logo.is_some());
        debug!(
            username = request.username,
            tier = request.tier,
            rank = request.rank,
            url = %url,
            "生成徽章地址"
        );

        url.into()
    }
}
