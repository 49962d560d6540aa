// ==========================================
// 补给品管理系统 - 应用层
// ==========================================
// 职责: 组装 Service、页面控制器与路由外壳
// ==========================================

pub mod interaction;
pub mod pages;
pub mod shell;
pub mod state;

// 重导出
pub use interaction::{AssumeYes, Confirmer, Notifier};
pub use pages::{DashboardPage, InventoryManagementPage, SupplyManagementPage, ViewMode};
pub use shell::{Route, Shell};
pub use state::{get_default_export_path, AppState};
