//! 最近一次生成的徽章地址
//!
//! 表单提交写入，结果页读取。并发写入时后写者覆盖先写者。

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};

/// 徽章地址快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastBadge {
    pub url: String,
    /// 初始默认值为 None
    pub generated_at: Option<DateTime<Utc>>,
}

/// 最近徽章存储槽
///
/// 读取无锁，写入整体替换快照，读者不会看到半写入的地址。
pub struct LastBadgeSlot {
    current: ArcSwap<LastBadge>,
}

impl LastBadgeSlot {
    pub fn new(default_url: impl Into<String>) -> Self {
        Self {
            current: ArcSwap::from_pointee(LastBadge {
                url: default_url.into(),
                generated_at: None,
            }),
        }
    }

    pub fn store(&self, url: impl Into<String>) {
        self.current.store(Arc::new(LastBadge {
            url: url.into(),
            generated_at: Some(Utc::now()),
        }));
    }

    pub fn current(&self) -> Arc<LastBadge> {
        self.current.load_full()
    }
}
