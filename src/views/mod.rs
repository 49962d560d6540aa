// ==========================================
// 补给品管理系统 - 视图层
// ==========================================
// 纯渲染: 输入数据 → 终端文本,不发请求不改状态
// ==========================================

pub mod dashboard;
pub mod form;
pub mod header;
pub mod supply_table;
pub mod table;
pub mod transaction_table;

pub use dashboard::{dashboard_cards, render_dashboard, DashboardCard};
pub use form::render_form;
pub use header::render_header;
pub use supply_table::render_supply_table;
pub use table::TextTable;
pub use transaction_table::render_transaction_table;

use chrono::NaiveDateTime;

use crate::i18n::t;

/// 日期时间显示格式
pub const DATE_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// 格式化服务端时间戳; 缺失时显示占位符
pub fn format_timestamp(value: Option<&NaiveDateTime>) -> String {
    value
        .map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_else(|| t("common.none"))
}
