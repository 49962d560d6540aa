// ==========================================
// 补给品管理系统 - 库存流水领域模型
// ==========================================
// 流水为只追加记录: 客户端只创建（入库/出库）,不修改不删除
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TransactionType;

// ==========================================
// InventoryTransaction - 库存流水
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTransaction {
    pub id: i64,
    pub supply_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub quantity: i32, // 变动量（正整数）,不是余额

    // 入库/出库接口直接回显实体时该字段可能为空
    #[serde(default)]
    pub transaction_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub note: Option<String>,
}

// ==========================================
// InventoryTransactionRequest - 入库/出库请求体
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryTransactionRequest {
    pub supply_id: i64,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl InventoryTransactionRequest {
    /// 构造入库请求
    pub fn stock_in(supply_id: i64, quantity: i32, note: Option<String>) -> Self {
        Self::new(supply_id, TransactionType::In, quantity, note)
    }

    /// 构造出库请求
    pub fn stock_out(supply_id: i64, quantity: i32, note: Option<String>) -> Self {
        Self::new(supply_id, TransactionType::Out, quantity, note)
    }

    /// 按类型构造请求; 空白备注视为无备注
    pub fn new(
        supply_id: i64,
        transaction_type: TransactionType,
        quantity: i32,
        note: Option<String>,
    ) -> Self {
        Self {
            supply_id,
            transaction_type,
            quantity,
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }
}
