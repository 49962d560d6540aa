// ==========================================
// 补给品管理系统 - 表单层
// ==========================================
// 职责: 声明式字段定义 {字段名 → 解析/校验规则}
// 约定: 所有输入经同一入口按字段类型转换,新增字段不改分支逻辑
// ==========================================

pub mod error;
pub mod schema;
pub mod stock_movement_form;
pub mod supply_form;

pub use error::{FormError, FormResult};
pub use schema::{FieldKind, FieldSpec, FieldValue, FormSchema, FormState};
pub use stock_movement_form::StockMovementForm;
pub use supply_form::SupplyForm;
