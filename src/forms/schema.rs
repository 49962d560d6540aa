// ==========================================
// 补给品管理系统 - 声明式表单定义
// ==========================================
// FieldSpec: 字段名 / 标签键 / 类型 / 是否必填
// FieldKind 决定文本如何转换:
//   Text    → 原样保留
//   Integer → i64（空输入视为 0）
//   Decimal → Decimal（空输入视为 0）
//   Choice  → 必须为候选值之一
// 范围与必填在提交前统一校验
// ==========================================

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::forms::error::{FormError, FormResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Integer { min: i64 },
    Decimal { min: Decimal },
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label_key: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// 字段默认值（新建表单的初始状态）
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Integer { .. } => FieldValue::Integer(0),
            FieldKind::Decimal { .. } => FieldValue::Decimal(Decimal::ZERO),
            FieldKind::Choice(options) => {
                FieldValue::Text(options.first().copied().unwrap_or_default().to_string())
            }
        }
    }

    /// 按字段类型转换原始输入
    pub fn parse(&self, raw: &str) -> FormResult<FieldValue> {
        let trimmed = raw.trim();
        match self.kind {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Integer { .. } => {
                if trimmed.is_empty() {
                    return Ok(FieldValue::Integer(0));
                }
                trimmed
                    .parse::<i64>()
                    .map(FieldValue::Integer)
                    .map_err(|_| self.invalid_number(raw))
            }
            FieldKind::Decimal { .. } => {
                if trimmed.is_empty() {
                    return Ok(FieldValue::Decimal(Decimal::ZERO));
                }
                Decimal::from_str(trimmed)
                    .map(FieldValue::Decimal)
                    .map_err(|_| self.invalid_number(raw))
            }
            FieldKind::Choice(options) => options
                .iter()
                .find(|option| option.eq_ignore_ascii_case(trimmed))
                .map(|option| FieldValue::Text(option.to_string()))
                .ok_or_else(|| FormError::InvalidChoice {
                    field: self.name.to_string(),
                    value: raw.to_string(),
                }),
        }
    }

    /// 提交前校验（必填 / 最小值）
    pub fn validate(&self, value: &FieldValue) -> FormResult<()> {
        match (self.kind, value) {
            (FieldKind::Text, FieldValue::Text(text)) if self.required && text.trim().is_empty() => {
                Err(FormError::Required(self.name.to_string()))
            }
            (FieldKind::Integer { min }, FieldValue::Integer(n)) if *n < min => {
                Err(self.out_of_range(min.to_string()))
            }
            (FieldKind::Decimal { min }, FieldValue::Decimal(d)) if *d < min => {
                Err(self.out_of_range(min.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn invalid_number(&self, raw: &str) -> FormError {
        FormError::InvalidNumber {
            field: self.name.to_string(),
            value: raw.to_string(),
        }
    }

    fn out_of_range(&self, min: String) -> FormError {
        FormError::OutOfRange {
            field: self.name.to_string(),
            min,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Decimal(Decimal),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Decimal(d) => write!(f, "{}", d),
        }
    }
}

/// 表单定义（有序字段列表）
#[derive(Debug)]
pub struct FormSchema {
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> FormResult<&FieldSpec> {
        self.fields
            .iter()
            .find(|spec| spec.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

// ==========================================
// FormState - 表单当前值
// ==========================================
#[derive(Debug, Clone)]
pub struct FormState {
    schema: &'static FormSchema,
    values: HashMap<&'static str, FieldValue>,
}

impl FormState {
    pub fn new(schema: &'static FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|spec| (spec.name, spec.default_value()))
            .collect();
        Self { schema, values }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    /// 写入原始输入（统一入口）
    pub fn set(&mut self, name: &str, raw: &str) -> FormResult<()> {
        let spec = self.schema.field(name)?;
        let value = spec.parse(raw)?;
        self.values.insert(spec.name, value);
        Ok(())
    }

    /// 写入已类型化的值（如编辑模式回填）
    pub fn set_value(&mut self, name: &str, value: FieldValue) -> FormResult<()> {
        let spec = self.schema.field(name)?;
        self.values.insert(spec.name, value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> FormResult<String> {
        match self.get(name) {
            Some(FieldValue::Text(text)) => Ok(text.clone()),
            Some(other) => Ok(other.to_string()),
            None => Err(FormError::UnknownField(name.to_string())),
        }
    }

    pub fn integer(&self, name: &str) -> FormResult<i64> {
        match self.get(name) {
            Some(FieldValue::Integer(n)) => Ok(*n),
            Some(other) => Err(FormError::InvalidNumber {
                field: name.to_string(),
                value: other.to_string(),
            }),
            None => Err(FormError::UnknownField(name.to_string())),
        }
    }

    pub fn decimal(&self, name: &str) -> FormResult<Decimal> {
        match self.get(name) {
            Some(FieldValue::Decimal(d)) => Ok(*d),
            Some(FieldValue::Integer(n)) => Ok(Decimal::from(*n)),
            Some(other) => Err(FormError::InvalidNumber {
                field: name.to_string(),
                value: other.to_string(),
            }),
            None => Err(FormError::UnknownField(name.to_string())),
        }
    }

    /// 按字段顺序校验,返回第一个错误
    pub fn validate(&self) -> FormResult<()> {
        for spec in self.schema.fields {
            let value = self
                .values
                .get(spec.name)
                .ok_or_else(|| FormError::UnknownField(spec.name.to_string()))?;
            spec.validate(value)?;
        }
        Ok(())
    }

    /// 恢复默认值
    pub fn reset(&mut self) {
        *self = Self::new(self.schema);
    }

    /// (标签键, 当前值) 列表,按字段顺序（渲染用）
    pub fn entries(&self) -> Vec<(&'static FieldSpec, String)> {
        self.schema
            .fields
            .iter()
            .map(|spec| {
                let value = self
                    .values
                    .get(spec.name)
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                (spec, value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_SCHEMA: FormSchema = FormSchema {
        fields: &[
            FieldSpec {
                name: "title",
                label_key: "test.title",
                kind: FieldKind::Text,
                required: true,
            },
            FieldSpec {
                name: "count",
                label_key: "test.count",
                kind: FieldKind::Integer { min: 1 },
                required: true,
            },
            FieldSpec {
                name: "price",
                label_key: "test.price",
                kind: FieldKind::Decimal { min: Decimal::ZERO },
                required: true,
            },
            FieldSpec {
                name: "mode",
                label_key: "test.mode",
                kind: FieldKind::Choice(&["A", "B"]),
                required: true,
            },
        ],
    };

    #[test]
    fn test_defaults() {
        let state = FormState::new(&TEST_SCHEMA);
        assert_eq!(state.get("title"), Some(&FieldValue::Text(String::new())));
        assert_eq!(state.get("count"), Some(&FieldValue::Integer(0)));
        assert_eq!(state.get("price"), Some(&FieldValue::Decimal(Decimal::ZERO)));
        assert_eq!(state.get("mode"), Some(&FieldValue::Text("A".to_string())));
    }

    #[test]
    fn test_numeric_fields_coerced() {
        let mut state = FormState::new(&TEST_SCHEMA);
        state.set("count", " 42 ").unwrap();
        state.set("price", "12.50").unwrap();
        state.set("title", " 42 ").unwrap();

        assert_eq!(state.integer("count").unwrap(), 42);
        assert_eq!(state.decimal("price").unwrap(), Decimal::from_str("12.50").unwrap());
        // 文本字段不做转换
        assert_eq!(state.text("title").unwrap(), " 42 ");
    }

    #[test]
    fn test_invalid_input_keeps_previous_value() {
        let mut state = FormState::new(&TEST_SCHEMA);
        state.set("count", "5").unwrap();

        let err = state.set("count", "five").unwrap_err();
        assert_eq!(err.field(), "count");
        assert_eq!(state.integer("count").unwrap(), 5);

        assert!(matches!(
            state.set("mode", "C"),
            Err(FormError::InvalidChoice { .. })
        ));
        assert!(matches!(
            state.set("missing", "x"),
            Err(FormError::UnknownField(_))
        ));
    }

    #[test]
    fn test_validate_required_and_min() {
        let mut state = FormState::new(&TEST_SCHEMA);
        assert_eq!(state.validate(), Err(FormError::Required("title".to_string())));

        state.set("title", "封筒").unwrap();
        assert!(matches!(state.validate(), Err(FormError::OutOfRange { .. })));

        state.set("count", "1").unwrap();
        state.set("price", "-0.01").unwrap();
        assert!(matches!(state.validate(), Err(FormError::OutOfRange { .. })));

        state.set("price", "0").unwrap();
        assert!(state.validate().is_ok());
    }

    #[test]
    fn test_reset() {
        let mut state = FormState::new(&TEST_SCHEMA);
        state.set("mode", "b").unwrap();
        assert_eq!(state.text("mode").unwrap(), "B");

        state.reset();
        assert_eq!(state.text("mode").unwrap(), "A");
    }
}
