// ==========================================
// 补给品管理系统 - 补给品领域模型
// ==========================================
// 对齐: 服务端 /supplies 资源的 JSON 结构（camelCase）
// 红线: quantity 是服务端维护的流水余额,客户端不做推算
// ==========================================

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ==========================================
// Supply - 补给品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supply {
    pub id: i64,          // 服务端分配,创建后不可变
    pub name: String,     // 品名（非空）
    pub quantity: i32,    // 当前在库数（>= 0）
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal, // 单价（>= 0）
    pub category: String, // 分类标签（自由文本）

    // 服务端在插入后未回读时可能为 null
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Supply {
    /// 提取可编辑字段（编辑表单的初始值）
    pub fn form_data(&self) -> SupplyFormData {
        SupplyFormData {
            name: self.name.clone(),
            quantity: self.quantity,
            unit_price: self.unit_price,
            category: self.category.clone(),
        }
    }
}

// ==========================================
// SupplyFormData - 新建/更新请求体
// ==========================================
// 不含 id 与时间戳（由服务端分配）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyFormData {
    pub name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    pub category: String,
}
