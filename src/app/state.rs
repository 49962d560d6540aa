// ==========================================
// 补给品管理系统 - 应用状态
// ==========================================
// 职责: 组装客户端实例与 Service,注入到各页面
// 红线: 不使用全局单例客户端,测试可注入任意 Transport
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::client::{ApiClient, ClientResult, Transport};
use crate::config::{env_keys, ClientConfig};
use crate::services::{InventoryService, SupplyService, EXPORT_FILE_NAME};

/// 应用状态
///
/// 包含共享的传输实例和 Service
#[derive(Clone)]
pub struct AppState {
    /// 补给品 Service
    pub supply_service: SupplyService,

    /// 库存流水 Service
    pub inventory_service: InventoryService,
}

impl AppState {
    /// 以配置创建 HTTP 客户端并组装 Service
    ///
    /// # 参数
    /// - config: 客户端配置
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(ClientError): HTTP 客户端初始化失败
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        tracing::info!(base_url = %config.base_url, "初始化AppState");
        let client = ApiClient::new(config)?;
        Ok(Self::with_transport(Arc::new(client)))
    }

    /// 以任意传输实现组装（测试注入假后端）
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            supply_service: SupplyService::new(transport.clone()),
            inventory_service: InventoryService::new(transport),
        }
    }
}

/// 获取默认导出路径
///
/// 优先级: SUPPLY_EXPORT_DIR > 用户下载目录 > 当前目录
pub fn get_default_export_path() -> PathBuf {
    // 允许通过环境变量显式指定导出目录（便于调试/测试/CI）
    if let Ok(dir) = std::env::var(env_keys::EXPORT_DIR) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed).join(EXPORT_FILE_NAME);
        }
    }

    dirs::download_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(EXPORT_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_export_file_name() {
        let path = get_default_export_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(EXPORT_FILE_NAME)
        );
    }
}
