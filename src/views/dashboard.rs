// ==========================================
// 补给品管理系统 - 仪表盘
// ==========================================
// 三张静态卡片: 补给品管理 / 库存管理 / 文件导入导出（仅说明,不跳转）
// ==========================================

use crate::app::shell::Route;
use crate::i18n::t;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCard {
    pub title: String,
    pub description: String,
    /// 跳转目标; None 表示仅展示
    pub route: Option<Route>,
}

pub fn dashboard_cards() -> Vec<DashboardCard> {
    [
        ("dashboard.supplies_title", "dashboard.supplies_desc", Some(Route::Supplies)),
        ("dashboard.inventory_title", "dashboard.inventory_desc", Some(Route::Inventory)),
        ("dashboard.files_title", "dashboard.files_desc", None),
    ]
    .into_iter()
    .map(|(title, description, route)| DashboardCard {
        title: t(title),
        description: t(description),
        route,
    })
    .collect()
}

pub fn render_dashboard() -> String {
    let mut out = String::new();
    for card in dashboard_cards() {
        out.push_str(&format!("■ {}\n  {}\n", card.title, card.description));
        if let Some(route) = card.route {
            out.push_str(&format!("  → {}\n", route.path()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::tests::locale_guard;

    #[test]
    fn test_three_cards() {
        let _guard = locale_guard("ja");
        let cards = dashboard_cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].title, "補給品管理");
        assert_eq!(cards[1].description, "入庫・出庫登録、在庫照会");
        assert_eq!(cards[2].title, "ファイル入出力");
        assert_eq!(cards[2].route, None);

        let rendered = render_dashboard();
        assert!(rendered.contains("→ /inventory"));
        assert_eq!(rendered.matches('→').count(), 2);
    }
}
