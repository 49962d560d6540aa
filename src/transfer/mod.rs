// ==========================================
// 补给品管理系统 - 导出/导入格式转换
// ==========================================
// 导出工作簿列: ID / 品名 / 数量 / 单价 / 分类 / 登记日时 / 更新日时
// 导入 CSV 列:   name,quantity,unitPrice,category
// ==========================================

pub mod error;
pub mod workbook;

pub use error::{TransferError, TransferResult};
pub use workbook::{rows_to_import_csv, workbook_to_import_csv, IMPORT_CSV_HEADER};
