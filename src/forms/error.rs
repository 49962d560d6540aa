// ==========================================
// 补给品管理系统 - 表单错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("未知字段: {0}")]
    UnknownField(String),

    #[error("字段 {field} 需要数值,实际输入: {value}")]
    InvalidNumber { field: String, value: String },

    #[error("字段 {field} 超出范围（最小值 {min}）")]
    OutOfRange { field: String, min: String },

    #[error("字段 {0} 为必填项")]
    Required(String),

    #[error("字段 {field} 的取值无效: {value}")]
    InvalidChoice { field: String, value: String },

    #[error("表单未打开")]
    FormClosed,
}

impl FormError {
    /// 出错的字段名
    pub fn field(&self) -> &str {
        match self {
            FormError::FormClosed => "",
            FormError::UnknownField(field) | FormError::Required(field) => field,
            FormError::InvalidNumber { field, .. }
            | FormError::OutOfRange { field, .. }
            | FormError::InvalidChoice { field, .. } => field,
        }
    }
}

/// Result 类型别名
pub type FormResult<T> = Result<T, FormError>;
