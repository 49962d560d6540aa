// ==========================================
// 补给品管理系统 - 集合状态层
// ==========================================
// 职责: 列表数据的 loading / error / data 状态机与重新获取
// 约定: 每次获取持有代次票据,过期响应直接丢弃
// ==========================================

pub mod resource;
pub mod supply_store;
pub mod transaction_store;

pub use resource::{FetchTicket, ResourceSnapshot, ResourceStore};
pub use supply_store::SupplyStore;
pub use transaction_store::TransactionStore;
