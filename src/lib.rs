// ==========================================
// 补给品管理系统 - 核心库
// ==========================================
// 系统定位: REST 后端之上的补给品 CRUD 与入出库登记客户端
// 技术栈: Rust + reqwest + tokio
// 红线: 服务端是唯一数据源,客户端每次变更后整体 refetch
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 客户端配置
pub mod config;

// 传输层 - HTTP 客户端与拦截器
pub mod client;

// 服务层 - REST 资源操作
pub mod services;

// 状态层 - 集合获取状态
pub mod store;

// 表单层 - 字段定义与校验
pub mod forms;

// 视图层 - 终端渲染
pub mod views;

// 应用层 - 页面与路由
pub mod app;

// 格式转换 - 导出工作簿 → 导入 CSV
pub mod transfer;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    InventoryTransaction, InventoryTransactionRequest, Supply, SupplyFormData, TransactionType,
};

// 传输
pub use client::{ApiClient, ClientError, ClientResult, Transport};

// 配置
pub use config::ClientConfig;

// 服务
pub use services::{InventoryService, SupplyService};

// 应用
pub use app::{
    AppState, Confirmer, DashboardPage, InventoryManagementPage, Notifier, Route, Shell,
    SupplyManagementPage, ViewMode,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "补给品管理系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
