// ==========================================
// 补给品管理系统 - 补给品一览表
// ==========================================

use rust_decimal::Decimal;

use crate::domain::Supply;
use crate::i18n::t;
use crate::views::table::TextTable;

/// 渲染补给品一览（空集合只输出表头）
pub fn render_supply_table(supplies: &[Supply]) -> String {
    let mut table = TextTable::new([
        t("supply.column_id"),
        t("supply.field_name"),
        t("supply.field_quantity"),
        t("supply.field_unit_price"),
        t("supply.field_category"),
    ]);

    for supply in supplies {
        table.push_row(vec![
            supply.id.to_string(),
            supply.name.clone(),
            supply.quantity.to_string(),
            format_price(supply.unit_price),
            supply.category.clone(),
        ]);
    }

    table.render()
}

pub fn format_price(price: Decimal) -> String {
    format!("¥{}", price.normalize())
}
