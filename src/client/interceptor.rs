// ==========================================
// 补给品管理系统 - 请求/响应拦截器
// ==========================================
// 默认实现为透传; 横切关注点（认证注入 / 日志）在此扩展
// ==========================================

use std::time::Instant;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Method;
use tracing::{error, info, warn};

use crate::client::error::{ClientError, ClientResult};
use crate::client::transport::{ApiRequest, ApiResponse};

/// 单次请求的上下文（方法 / 路径 / 开始时间）
#[derive(Debug, Clone)]
pub struct ExchangeContext {
    pub method: Method,
    pub path: String,
    pub started_at: Instant,
}

impl ExchangeContext {
    pub fn new(method: &Method, path: &str) -> Self {
        Self {
            method: method.clone(),
            path: path.to_string(),
            started_at: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.started_at.elapsed().as_millis()
    }
}

/// 请求拦截器
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, _ctx: &ExchangeContext, request: ApiRequest) -> ClientResult<ApiRequest> {
        Ok(request)
    }
}

/// 响应拦截器
///
/// 错误必须继续向上返回,拦截器只能观察或改写,不能吞掉
pub trait ResponseInterceptor: Send + Sync {
    fn on_response(&self, _ctx: &ExchangeContext, response: ApiResponse) -> ClientResult<ApiResponse> {
        Ok(response)
    }

    fn on_error(&self, _ctx: &ExchangeContext, error: ClientError) -> ClientError {
        error
    }
}

// ==========================================
// BearerAuthInterceptor - 认证头注入
// ==========================================
pub struct BearerAuthInterceptor {
    token: String,
}

impl BearerAuthInterceptor {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl RequestInterceptor for BearerAuthInterceptor {
    fn on_request(&self, _ctx: &ExchangeContext, mut request: ApiRequest) -> ClientResult<ApiRequest> {
        // 调用方显式设置的认证头优先
        if !request.headers.contains_key(AUTHORIZATION) {
            let value = HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|e| ClientError::InvalidRequest(format!("认证令牌无效: {}", e)))?;
            request.headers.insert(AUTHORIZATION, value);
        }
        Ok(request)
    }
}

// ==========================================
// LoggingInterceptor - 请求/响应日志
// ==========================================
// >>> Request: METHOD path
// <<< Response: METHOD path - Status: n - Nms
// 状态 >= 400 记 warn, 传输失败记 error
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingInterceptor;

impl RequestInterceptor for LoggingInterceptor {
    fn on_request(&self, ctx: &ExchangeContext, request: ApiRequest) -> ClientResult<ApiRequest> {
        info!(">>> Request: {} {}", ctx.method, ctx.path);
        Ok(request)
    }
}

impl ResponseInterceptor for LoggingInterceptor {
    fn on_response(&self, ctx: &ExchangeContext, response: ApiResponse) -> ClientResult<ApiResponse> {
        info!(
            "<<< Response: {} {} - Status: {} - {}ms",
            ctx.method,
            ctx.path,
            response.status.as_u16(),
            ctx.elapsed_ms()
        );
        Ok(response)
    }

    fn on_error(&self, ctx: &ExchangeContext, err: ClientError) -> ClientError {
        match &err {
            ClientError::Status { status, .. } => warn!(
                "<<< Response: {} {} - Status: {} - {}ms",
                ctx.method,
                ctx.path,
                status.as_u16(),
                ctx.elapsed_ms()
            ),
            other => error!(
                "<<< Response: {} {} - {}ms - Error: {}",
                ctx.method,
                ctx.path,
                ctx.elapsed_ms(),
                other
            ),
        }
        err
    }
}
