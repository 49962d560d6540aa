// ==========================================
// 补给品管理系统 - Service 层
// ==========================================
// 职责: 每个操作对应一次 REST 调用,返回解析后的载荷
// 错误: 不做转换,原样返回给调用方（页面层负责提示与日志）
// ==========================================

pub mod inventory_service;
pub mod supply_service;

pub use inventory_service::InventoryService;
pub use supply_service::{SupplyService, EXPORT_FILE_NAME};

/// 补给品资源路径（唯一前缀）
pub(crate) const SUPPLIES_PATH: &str = "/supplies";

/// 库存流水资源路径
pub(crate) const INVENTORY_PATH: &str = "/inventory";
