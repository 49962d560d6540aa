// ==========================================
// 补给品管理系统 - 客户端配置
// ==========================================
// 职责: 从环境变量加载配置,校验基础 URL
// 约定: 未提供基础 URL 时使用反向代理默认地址
// ==========================================

use std::env;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

/// 默认基础 URL（后端上下文路径 /api）
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOCALE: &str = "ja";

/// 环境变量名
pub mod env_keys {
    pub const BASE_URL: &str = "SUPPLY_API_BASE_URL";
    pub const TOKEN: &str = "SUPPLY_API_TOKEN";
    pub const TIMEOUT_SECS: &str = "SUPPLY_API_TIMEOUT_SECS";
    pub const LOCALE: &str = "SUPPLY_LOCALE";
    pub const EXPORT_DIR: &str = "SUPPLY_EXPORT_DIR";
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("基础 URL 无效: {0}")]
    InvalidBaseUrl(String),

    #[error("基础 URL 必须使用 http/https: {0}")]
    UnsupportedScheme(String),
}

// ==========================================
// ClientConfig - 客户端配置
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// 基础 URL（已规范化,不含末尾斜杠）
    pub base_url: String,
    /// 认证令牌（可选,由请求拦截器注入）
    pub api_token: Option<String>,
    /// 单次请求超时
    pub timeout: Duration,
    /// 界面语言
    pub locale: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl ClientConfig {
    /// 从环境变量加载配置
    ///
    /// # 环境变量
    /// - SUPPLY_API_BASE_URL: 基础 URL 覆写（可选）
    /// - SUPPLY_API_TOKEN: 认证令牌（可选）
    /// - SUPPLY_API_TIMEOUT_SECS: 超时秒数（正整数,可选）
    /// - SUPPLY_LOCALE: 界面语言（ja / en / zh-CN）
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = non_empty_var(env_keys::BASE_URL);
        let api_token = non_empty_var(env_keys::TOKEN);
        let timeout_secs = env::var(env_keys::TIMEOUT_SECS)
            .ok()
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let locale = non_empty_var(env_keys::LOCALE).unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Ok(Self::default()
            .with_base_url(base_url.as_deref())?
            .with_token(api_token)
            .with_timeout(Duration::from_secs(timeout_secs))
            .with_locale(Some(locale)))
    }

    /// 覆写基础 URL（None 表示保持当前值）
    pub fn with_base_url(mut self, base_url: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(raw) = base_url {
            self.base_url = normalize_base_url(raw)?;
        }
        Ok(self)
    }

    /// 覆写认证令牌（None 表示保持当前值）
    pub fn with_token(mut self, token: Option<String>) -> Self {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.api_token = Some(token);
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 覆写语言（None 表示保持当前值）
    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        if let Some(locale) = locale.filter(|l| !l.trim().is_empty()) {
            self.locale = locale.trim().to_string();
        }
        self
    }

    /// 拼接资源路径
    ///
    /// # 示例
    /// base_url = "http://host/api", path = "/supplies/1" => "http://host/api/supplies/1"
    pub fn resolve(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 校验并规范化基础 URL（去除末尾斜杠）
pub(crate) fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", trimmed, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.locale, "ja");
        assert!(config.api_token.is_none());
    }

    #[test]
    fn test_base_url_normalized() {
        let config = ClientConfig::default()
            .with_base_url(Some("https://supply.example.com/api/"))
            .unwrap();
        assert_eq!(config.base_url, "https://supply.example.com/api");
        assert_eq!(
            config.resolve("/supplies/3"),
            "https://supply.example.com/api/supplies/3"
        );
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(matches!(
            ClientConfig::default().with_base_url(Some("not a url")),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            ClientConfig::default().with_base_url(Some("ftp://host/api")),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_overrides_keep_existing_on_none() {
        let config = ClientConfig::default()
            .with_token(Some("secret".to_string()))
            .with_token(None)
            .with_locale(Some("  ".to_string()));
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.locale, "ja");
    }
}
