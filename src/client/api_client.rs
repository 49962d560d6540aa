// ==========================================
// 补给品管理系统 - HTTP 客户端
// ==========================================
// 职责: 持有唯一的 reqwest::Client,统一基础 URL 与默认请求头
// 默认请求头: Content-Type / Accept = application/json
// ==========================================

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use crate::client::error::ClientResult;
use crate::client::interceptor::{
    BearerAuthInterceptor, ExchangeContext, LoggingInterceptor, RequestInterceptor,
    ResponseInterceptor,
};
use crate::client::transport::{ApiRequest, ApiResponse, RequestBody, Transport};
use crate::config::ClientConfig;

/// API 客户端
pub struct ApiClient {
    http: Client,
    config: ClientConfig,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// 创建客户端
    ///
    /// 默认注册日志拦截器; 配置了令牌时注册认证拦截器
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json, */*"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        let mut client = Self {
            http,
            config,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        };

        if let Some(token) = client.config.api_token.clone() {
            client = client.with_request_interceptor(Arc::new(BearerAuthInterceptor::new(token)));
        }

        let logging = Arc::new(LoggingInterceptor);
        Ok(client
            .with_request_interceptor(logging.clone())
            .with_response_interceptor(logging))
    }

    pub fn with_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    pub fn with_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let url = self.config.resolve(&request.path);
        debug!(url = %url, "发送请求");

        let mut builder = self
            .http
            .request(request.method, &url)
            .headers(request.headers);

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::File(file) => {
                let part = Part::bytes(file.bytes)
                    .file_name(file.file_name)
                    .mime_str(&file.mime)?;
                builder.multipart(Form::new().part(file.field, part))
            }
        };

        let resp = builder.send().await?;
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        ApiResponse {
            status,
            headers,
            body,
        }
        .error_for_status()
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let ctx = ExchangeContext::new(&request.method, &request.path);

        let mut request = request;
        for interceptor in &self.request_interceptors {
            request = interceptor.on_request(&ctx, request)?;
        }

        let mut outcome = self.execute(request).await;
        for interceptor in &self.response_interceptors {
            outcome = match outcome {
                Ok(response) => interceptor.on_response(&ctx, response),
                Err(err) => Err(interceptor.on_error(&ctx, err)),
            };
        }

        outcome
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .finish()
    }
}

