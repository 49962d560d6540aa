// ==========================================
// 补给品管理系统 - 补给品表单
// ==========================================
// 双模式: 传入既有补给品即为编辑（回填字段）,否则为新建（空值/零值）
// ==========================================

use rust_decimal::Decimal;

use crate::domain::{Supply, SupplyFormData};
use crate::forms::error::{FormError, FormResult};
use crate::forms::schema::{FieldKind, FieldSpec, FieldValue, FormSchema, FormState};

pub static SUPPLY_FORM_SCHEMA: FormSchema = FormSchema {
    fields: &[
        FieldSpec {
            name: "name",
            label_key: "supply.field_name",
            kind: FieldKind::Text,
            required: true,
        },
        FieldSpec {
            name: "quantity",
            label_key: "supply.field_quantity",
            kind: FieldKind::Integer { min: 0 },
            required: true,
        },
        FieldSpec {
            name: "unitPrice",
            label_key: "supply.field_unit_price",
            kind: FieldKind::Decimal { min: Decimal::ZERO },
            required: true,
        },
        FieldSpec {
            name: "category",
            label_key: "supply.field_category",
            kind: FieldKind::Text,
            required: true,
        },
    ],
};

#[derive(Debug, Clone)]
pub struct SupplyForm {
    editing: Option<Supply>,
    state: FormState,
}

impl SupplyForm {
    pub fn new(supply: Option<&Supply>) -> Self {
        match supply {
            Some(supply) => Self::edit(supply),
            None => Self::create(),
        }
    }

    /// 新建模式
    pub fn create() -> Self {
        Self {
            editing: None,
            state: FormState::new(&SUPPLY_FORM_SCHEMA),
        }
    }

    /// 编辑模式（以既有记录回填）
    pub fn edit(supply: &Supply) -> Self {
        let mut state = FormState::new(&SUPPLY_FORM_SCHEMA);
        let prefill = [
            ("name", FieldValue::Text(supply.name.clone())),
            ("quantity", FieldValue::Integer(i64::from(supply.quantity))),
            ("unitPrice", FieldValue::Decimal(supply.unit_price)),
            ("category", FieldValue::Text(supply.category.clone())),
        ];
        for (name, value) in prefill {
            // 字段名均来自 SUPPLY_FORM_SCHEMA
            let _ = state.set_value(name, value);
        }

        Self {
            editing: Some(supply.clone()),
            state,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing.as_ref().map(|s| s.id)
    }

    pub fn title_key(&self) -> &'static str {
        if self.is_edit() {
            "supply.form_title_edit"
        } else {
            "supply.form_title_create"
        }
    }

    pub fn submit_label_key(&self) -> &'static str {
        if self.is_edit() {
            "supply.button_update"
        } else {
            "supply.button_register"
        }
    }

    pub fn set(&mut self, name: &str, raw: &str) -> FormResult<()> {
        self.state.set(name, raw)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// 校验并生成请求体
    pub fn to_form_data(&self) -> FormResult<SupplyFormData> {
        self.state.validate()?;

        let quantity = i32::try_from(self.state.integer("quantity")?).map_err(|_| {
            FormError::OutOfRange {
                field: "quantity".to_string(),
                min: "0".to_string(),
            }
        })?;

        Ok(SupplyFormData {
            name: self.state.text("name")?.trim().to_string(),
            quantity,
            unit_price: self.state.decimal("unitPrice")?,
            category: self.state.text("category")?.trim().to_string(),
        })
    }
}
