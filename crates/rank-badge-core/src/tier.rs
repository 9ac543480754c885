//! 段位定义
//!
//! 段位是封闭集合，每个段位对应一种徽章颜色和一枚 48x48 PNG 图标。
//! 两张表都在编译期确定；图标的 data URI 在首次使用时编码一次，之后只读。

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::CoreError;

/// 抓取失败或用户名为空时使用的段位
pub const DEFAULT_TIER: &str = "novice";

/// 段位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Novice,
    Contributor,
    Expert,
    Master,
    Grandmaster,
}

impl Tier {
    /// 全部段位，按等级从低到高排列
    pub const ALL: [Tier; 5] = [
        Tier::Novice,
        Tier::Contributor,
        Tier::Expert,
        Tier::Master,
        Tier::Grandmaster,
    ];

    /// 页面数据中使用的段位名
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Novice => "novice",
            Self::Contributor => "contributor",
            Self::Expert => "expert",
            Self::Master => "master",
            Self::Grandmaster => "grandmaster",
        }
    }

    /// 徽章颜色（不带 # 的十六进制）
    pub fn color(self) -> &'static str {
        match self {
            Self::Novice => "4FCB93",
            Self::Contributor => "20BEFF",
            Self::Expert => "96508E",
            Self::Master => "F76629",
            Self::Grandmaster => "DDAA17",
        }
    }

    /// 段位图标原始 PNG 数据
    pub fn logo_png(self) -> &'static [u8] {
        match self {
            Self::Novice => include_bytes!("../assets/logos/novice.png"),
            Self::Contributor => include_bytes!("../assets/logos/contributor.png"),
            Self::Expert => include_bytes!("../assets/logos/expert.png"),
            Self::Master => include_bytes!("../assets/logos/master.png"),
            Self::Grandmaster => include_bytes!("../assets/logos/grandmaster.png"),
        }
    }

    /// 段位图标的 `data:image/png;base64,...` 形式
    pub fn logo_data_uri(self) -> &'static str {
        &LOGO_DATA_URIS[self as usize]
    }
}

static LOGO_DATA_URIS: LazyLock<[String; 5]> = LazyLock::new(|| {
    Tier::ALL.map(|tier| format!("data:image/png;base64,{}", BASE64.encode(tier.logo_png())))
});

impl FromStr for Tier {
    type Err = CoreError;

    /// 区分大小写，与页面数据中的取值完全一致
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| CoreError::UnknownTier(s.to_string()))
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 按段位名查徽章颜色，未知段位返回 None
pub fn color_for(tier: &str) -> Option<&'static str> {
    tier.parse::<Tier>().ok().map(Tier::color)
}

/// 按段位名查图标 data URI，未知段位返回 None
pub fn logo_for(tier: &str) -> Option<&'static str> {
    tier.parse::<Tier>().ok().map(Tier::logo_data_uri)
}
