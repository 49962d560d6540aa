// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use std::str::FromStr;

use rust_decimal::Decimal;
use supply_manager::domain::SupplyFormData;

// ==========================================
// SupplyFormData 构建器
// ==========================================

pub struct SupplyBuilder {
    name: String,
    quantity: i32,
    unit_price: Decimal,
    category: String,
}

impl SupplyBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: 0,
            unit_price: Decimal::ZERO,
            category: "文房具".to_string(),
        }
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn unit_price(mut self, price: &str) -> Self {
        self.unit_price = Decimal::from_str(price).unwrap();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn build(self) -> SupplyFormData {
        SupplyFormData {
            name: self.name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            category: self.category,
        }
    }
}
