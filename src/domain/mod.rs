// ==========================================
// 补给品管理系统 - 领域模型层
// ==========================================
// 职责: 定义补给品、库存流水等实体与类型
// 红线: 不含网络访问逻辑; 数量只信任服务端返回值
// ==========================================

pub mod inventory;
pub mod supply;
pub mod types;

// 重导出核心类型
pub use inventory::{InventoryTransaction, InventoryTransactionRequest};
pub use supply::{Supply, SupplyFormData};
pub use types::TransactionType;
