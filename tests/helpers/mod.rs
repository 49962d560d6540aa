// ==========================================
// 集成测试辅助模块
// ==========================================
// 各测试文件只使用其中一部分
#![allow(dead_code)]

pub mod fake_backend;
pub mod interaction;
pub mod page_test_helper;
pub mod test_data_builder;
