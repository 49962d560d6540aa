// ==========================================
// 补给品管理系统 - API 客户端层
// ==========================================
// 职责: 统一的 HTTP 客户端实例（基础 URL / 默认请求头 / 拦截器）
// 约定: 客户端显式构造后注入各 Service,不使用全局单例
// ==========================================

pub mod api_client;
pub mod error;
pub mod interceptor;
pub mod transport;

// 重导出核心类型
pub use api_client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use interceptor::{
    BearerAuthInterceptor, ExchangeContext, LoggingInterceptor, RequestInterceptor,
    ResponseInterceptor,
};
pub use transport::{ApiRequest, ApiResponse, FilePart, RequestBody, Transport};
