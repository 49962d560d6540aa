// ==========================================
// 补给品管理系统 - 传输抽象
// ==========================================
// Service 只依赖 Transport trait:
// - 生产环境: ApiClient（reqwest）
// - 测试环境: 内存假后端
// 约定: 非 2xx 响应必须以 ClientError::Status 返回
// ==========================================

use std::path::Path;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::error::{ClientError, ClientResult};

// ==========================================
// 请求体
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    /// multipart/form-data 单文件上传
    File(FilePart),
}

/// multipart 文件段
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(field: &str, file_name: &str, mime: &str, bytes: Vec<u8>) -> Self {
        Self {
            field: field.to_string(),
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes,
        }
    }

    /// 读取本地文件作为上传段（MIME 按扩展名推断）
    pub async fn from_path(field: &str, path: &Path) -> ClientResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        let mime = match ext.as_str() {
            "csv" => "text/csv",
            "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            _ => "application/octet-stream",
        };

        Ok(Self::new(field, &file_name, mime, bytes))
    }
}

// ==========================================
// ApiRequest - 与传输实现无关的请求描述
// ==========================================
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// 相对基础 URL 的资源路径,如 "/supplies/1"
    pub path: String,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn post_json<T: Serialize>(path: impl Into<String>, payload: &T) -> ClientResult<Self> {
        Self::new(Method::POST, path).with_json(payload)
    }

    pub fn put_json<T: Serialize>(path: impl Into<String>, payload: &T) -> ClientResult<Self> {
        Self::new(Method::PUT, path).with_json(payload)
    }

    pub fn post_file(path: impl Into<String>, part: FilePart) -> Self {
        let mut request = Self::new(Method::POST, path);
        request.body = RequestBody::File(part);
        request
    }

    fn with_json<T: Serialize>(mut self, payload: &T) -> ClientResult<Self> {
        let value = serde_json::to_value(payload)
            .map_err(|e| ClientError::InvalidRequest(format!("请求体序列化失败: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// JSON 请求体（测试与假后端使用）
    pub fn json_body<T: DeserializeOwned>(&self) -> ClientResult<T> {
        match &self.body {
            RequestBody::Json(value) => serde_json::from_value(value.clone())
                .map_err(|e| ClientError::Decode(format!("请求体解析失败: {}", e))),
            _ => Err(ClientError::InvalidRequest("请求不含 JSON 请求体".to_string())),
        }
    }
}

// ==========================================
// ApiResponse - 已读取完毕的响应
// ==========================================
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body,
        }
    }

    /// 非 2xx 转换为 ClientError::Status
    pub fn error_for_status(self) -> ClientResult<Self> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(ClientError::Status {
                status: self.status,
                body: self.text(),
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> ClientResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            ClientError::Decode(format!("status={} error={}", self.status, e))
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.body
    }
}

// ==========================================
// Transport - 传输接口
// ==========================================
#[async_trait]
pub trait Transport: Send + Sync {
    /// 发送请求并读取完整响应
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse>;
}
