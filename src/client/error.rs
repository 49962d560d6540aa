// ==========================================
// 补给品管理系统 - 客户端错误类型
// ==========================================
// 传输失败 / 非 2xx 状态 / 服务端校验拒绝 对调用方都表现为 Err,
// 原样向上传播,由页面层统一转换为通用提示
// ==========================================

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP 请求失败: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP 状态错误 {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("响应解析失败: {0}")]
    Decode(String),

    #[error("请求构建失败: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// 服务端返回的状态码（仅 Status 变体）
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Result 类型别名
pub type ClientResult<T> = Result<T, ClientError>;
