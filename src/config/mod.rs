// ==========================================
// 补给品管理系统 - 配置层
// ==========================================
// 职责: 客户端配置（基础 URL / 超时 / 认证令牌 / 语言）
// 来源: 环境变量, 命令行参数可覆写
// ==========================================

pub mod client_config;

// 重导出
pub use client_config::{env_keys, ClientConfig, ConfigError, DEFAULT_BASE_URL};
