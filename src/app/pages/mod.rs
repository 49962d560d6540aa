// ==========================================
// 补给品管理系统 - 页面控制器
// ==========================================
// 页面负责: 视图切换 / 编辑选择 / 变更后 refetch / 失败提示
// 失败提示统一为本地化通用文本,细节只写日志
// ==========================================

pub mod dashboard_page;
pub mod inventory_page;
pub mod supply_page;

pub use dashboard_page::DashboardPage;
pub use inventory_page::InventoryManagementPage;
pub use supply_page::{SupplyManagementPage, ViewMode};

use crate::i18n::t;
use crate::store::ResourceSnapshot;

/// 渲染集合的 loading / error 状态; 均不存在时返回 None
pub(crate) fn render_status<T>(snapshot: &ResourceSnapshot<T>) -> Option<String> {
    if snapshot.loading {
        return Some(format!("{}\n", t("common.loading")));
    }
    snapshot.error.as_ref().map(|message| format!("{}\n", message))
}
