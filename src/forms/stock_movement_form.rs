// ==========================================
// 补给品管理系统 - 出入库登记表单
// ==========================================
// 字段: supplyId（补给品）/ type（IN|OUT,默认 IN）/ quantity（>= 1）/ note（可选）
// 登记成功后恢复默认值
// ==========================================

use crate::domain::{InventoryTransactionRequest, TransactionType};
use crate::forms::error::{FormError, FormResult};
use crate::forms::schema::{FieldKind, FieldSpec, FormSchema, FormState};

pub static STOCK_MOVEMENT_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldSpec {
            name: "supplyId",
            label_key: "inventory.field_supply",
            kind: FieldKind::Integer { min: 1 },
            required: true,
        },
        FieldSpec {
            name: "type",
            label_key: "inventory.field_type",
            kind: FieldKind::Choice(&["IN", "OUT"]),
            required: true,
        },
        FieldSpec {
            name: "quantity",
            label_key: "inventory.field_quantity",
            kind: FieldKind::Integer { min: 1 },
            required: true,
        },
        FieldSpec {
            name: "note",
            label_key: "inventory.field_note",
            kind: FieldKind::Text,
            required: false,
        },
    ],
};

#[derive(Debug, Clone)]
pub struct StockMovementForm {
    state: FormState,
}

impl Default for StockMovementForm {
    fn default() -> Self {
        Self::new()
    }
}

impl StockMovementForm {
    pub fn new() -> Self {
        Self {
            state: FormState::new(&STOCK_MOVEMENT_SCHEMA),
        }
    }

    pub fn set(&mut self, name: &str, raw: &str) -> FormResult<()> {
        self.state.set(name, raw)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn transaction_type(&self) -> FormResult<TransactionType> {
        let raw = self.state.text("type")?;
        raw.parse().map_err(|_| FormError::InvalidChoice {
            field: "type".to_string(),
            value: raw,
        })
    }

    /// 校验并生成请求体
    pub fn to_request(&self) -> FormResult<InventoryTransactionRequest> {
        self.state.validate()?;

        let quantity = i32::try_from(self.state.integer("quantity")?).map_err(|_| {
            FormError::OutOfRange {
                field: "quantity".to_string(),
                min: "1".to_string(),
            }
        })?;
        let note = Some(self.state.text("note")?);

        Ok(InventoryTransactionRequest::new(
            self.state.integer("supplyId")?,
            self.transaction_type()?,
            quantity,
            note,
        ))
    }
}
