// ==========================================
// 补给品管理系统 - 格式转换错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("Excel 文件无工作表")]
    NoWorksheet,

    #[error("Excel 文件无表头行")]
    MissingHeader,

    #[error("第 {row} 行缺少列: {column}")]
    MissingColumn { row: usize, column: &'static str },

    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV 输出失败: {0}")]
    Output(String),
}

/// Result 类型别名
pub type TransferResult<T> = Result<T, TransferError>;
