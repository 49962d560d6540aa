// ==========================================
// 补给品管理系统 - 入出库履历表
// ==========================================
// 种别显示本地化标签,备注缺失显示 "-"
// ==========================================

use crate::domain::InventoryTransaction;
use crate::i18n::t;
use crate::views::format_timestamp;
use crate::views::table::TextTable;

/// 渲染入出库履历（空集合只输出表头）
pub fn render_transaction_table(transactions: &[InventoryTransaction]) -> String {
    let mut table = TextTable::new([
        t("inventory.column_date"),
        t("inventory.column_supply_id"),
        t("inventory.field_type"),
        t("inventory.field_quantity"),
        t("inventory.field_note"),
    ]);

    for tx in transactions {
        let note = tx
            .note
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| t("common.none"));

        table.push_row(vec![
            format_timestamp(tx.transaction_date.as_ref()),
            tx.supply_id.to_string(),
            t(tx.transaction_type.label_key()),
            tx.quantity.to_string(),
            note,
        ]);
    }

    table.render()
}
