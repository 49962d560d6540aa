// ==========================================
// 补给品管理系统 - 工作簿 → 导入 CSV
// ==========================================
// 读取第一个工作表,跳过表头行与完全空白的行
// ==========================================

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use csv::Writer;

use crate::transfer::error::{TransferError, TransferResult};

/// 导入 CSV 表头
pub const IMPORT_CSV_HEADER: [&str; 4] = ["name", "quantity", "unitPrice", "category"];

/// 导出工作簿中对应导入列的位置（0 起）
const EXPORT_COLUMNS: [usize; 4] = [1, 2, 3, 4];

/// 将导出的 Excel 字节转换为导入用 CSV 文本
pub fn workbook_to_import_csv(bytes: &[u8]) -> TransferResult<String> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| TransferError::ExcelParseError(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(TransferError::NoWorksheet)?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| TransferError::ExcelParseError(e.to_string()))?;

    let mut rows = range.rows();
    rows.next().ok_or(TransferError::MissingHeader)?;

    let csv = rows_to_import_csv(rows)?;
    tracing::debug!(sheet = %sheet_name, bytes = csv.len(), "导入用 CSV 已生成");
    Ok(csv)
}

/// 将数据行（不含表头）写为导入 CSV
///
/// # 返回
/// 带表头的 CSV 文本
pub fn rows_to_import_csv<'a, I>(rows: I) -> TransferResult<String>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(IMPORT_CSV_HEADER)?;

    for (idx, row) in rows.into_iter().enumerate() {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let mut record = Vec::with_capacity(EXPORT_COLUMNS.len());
        for (column, name) in EXPORT_COLUMNS.iter().zip(IMPORT_CSV_HEADER) {
            let cell = row.get(*column).ok_or(TransferError::MissingColumn {
                // 表头占第 1 行
                row: idx + 2,
                column: name,
            })?;
            record.push(cell.to_string().trim().to_string());
        }
        writer.write_record(&record)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TransferError::Output(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| TransferError::Output(e.to_string()))
}
