// ==========================================
// 补给品管理系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 出入库类型 (Transaction Type)
// ==========================================
// 封闭枚举: 只有入库/出库两种
// 序列化格式: "IN" / "OUT" (与服务端一致)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    #[default]
    In,  // 入库（库存增加）
    Out, // 出库（库存减少）
}

impl TransactionType {
    /// 对应的 i18n 显示键
    pub fn label_key(&self) -> &'static str {
        match self {
            TransactionType::In => "inventory.type_in",
            TransactionType::Out => "inventory.type_out",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::In => write!(f, "IN"),
            TransactionType::Out => write!(f, "OUT"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(TransactionType::In),
            "OUT" => Ok(TransactionType::Out),
            other => Err(format!("未知的出入库类型: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_type_serde() {
        assert_eq!(serde_json::to_string(&TransactionType::In).unwrap(), "\"IN\"");
        assert_eq!(serde_json::to_string(&TransactionType::Out).unwrap(), "\"OUT\"");

        let parsed: TransactionType = serde_json::from_str("\"OUT\"").unwrap();
        assert_eq!(parsed, TransactionType::Out);
    }

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!("in".parse::<TransactionType>().unwrap(), TransactionType::In);
        assert_eq!(" OUT ".parse::<TransactionType>().unwrap(), TransactionType::Out);
        assert!("MOVE".parse::<TransactionType>().is_err());
    }
}
