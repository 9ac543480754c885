//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// 资料站点配置
///
/// 抓取用户主页时使用的站点地址、请求超时和 User-Agent
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProfileSiteConfig {
    pub base_url: String,
    /// 请求超时秒数，0 表示不设超时
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for ProfileSiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.kaggle.com".to_string(),
            timeout_seconds: 10,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64; rv:102.0) Gecko/20100101 Firefox/102.0"
                .to_string(),
        }
    }
}

impl ProfileSiteConfig {
    /// 请求超时，`timeout_seconds = 0` 时返回 None
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_seconds > 0).then(|| Duration::from_secs(self.timeout_seconds))
    }
}

/// 徽章渲染服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BadgeServiceConfig {
    pub base_url: String,
    /// 尚未生成过徽章时页面展示的默认徽章
    pub default_badge_url: String,
}

impl Default for BadgeServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://img.shields.io/badge".to_string(),
            default_badge_url:
                "https://img.shields.io/badge/Kaggle-grandmaster-0?color=DDAA17&style=flat-square"
                    .to_string(),
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 日志输出格式：json（结构化）或 pretty（人类可读）
    pub log_format: String,
    pub metrics_enabled: bool,
    pub metrics_port: u16,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            metrics_enabled: false,
            metrics_port: 9090,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub server: ServerConfig,
    pub profile_site: ProfileSiteConfig,
    pub badge_service: BadgeServiceConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（BADGE_ 前缀，嵌套字段用双下划线，如 BADGE_PROFILE_SITE__BASE_URL -> profile_site.base_url）
    /// 5. 服务特定端口环境变量（如 BADGE_WEB_PORT）
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        // .env 文件可选，不存在时忽略
        let _ = dotenvy::dotenv();

        let env = std::env::var("BADGE_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        Self::load_from(service_name, &env, Path::new(&config_dir))
    }

    /// 从指定目录加载配置，不读取 BADGE_ENV / CONFIG_DIR
    pub fn load_from(
        service_name: &str,
        environment: &str,
        config_dir: &Path,
    ) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", environment)?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(
                File::from(config_dir.join(format!("{}.toml", environment))).required(false),
            )
            .add_source(
                File::from(config_dir.join(format!("{}.toml", service_name))).required(false),
            )
            .add_source(
                Environment::with_prefix("BADGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if let Some(port) = Self::get_service_port_from_env(service_name) {
            config.server.port = port;
        }

        Ok(config)
    }

    /// 从环境变量获取服务特定端口
    ///
    /// - badge-web-service -> BADGE_WEB_PORT
    /// - 其他服务名按通用规则转换
    fn get_service_port_from_env(service_name: &str) -> Option<u16> {
        let env_var_name = Self::port_env_var_name(service_name);
        std::env::var(env_var_name)
            .ok()
            .and_then(|v| v.parse().ok())
    }

    /// 服务名到端口环境变量名的映射
    ///
    /// 未明确映射的服务将 "my-service-name" 转换为 "MY_SERVICE_NAME_PORT"
    fn port_env_var_name(service_name: &str) -> String {
        match service_name {
            "badge-web-service" => "BADGE_WEB_PORT".to_string(),
            _ => format!("{}_PORT", service_name.to_uppercase().replace('-', "_")),
        }
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
