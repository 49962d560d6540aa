// ==========================================
// 工作簿 → 导入 CSV 集成测试
// ==========================================
// 测试范围:
// 1. 服务端导出布局（ID/補給品名/数量/単価/カテゴリ/登録日時/更新日時）
// 2. 空工作表
// ==========================================

use supply_manager::transfer::{workbook_to_import_csv, TransferError};

const SUPPLIES_EXPORT: &str = "tests/fixtures/supplies_export.xlsx";
const EMPTY_EXPORT: &str = "tests/fixtures/empty_export.xlsx";

#[test]
fn test_workbook_to_import_csv_导出布局() {
    let bytes = std::fs::read(SUPPLIES_EXPORT).unwrap();

    let csv = workbook_to_import_csv(&bytes).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    // 表头行被替换,空行被跳过,ID 与时间列被丢弃
    assert_eq!(
        lines,
        vec![
            "name,quantity,unitPrice,category",
            "ボールペン,120,150.5,文房具",
            "\"Paper, A4\",0,520,紙",
        ]
    );
}

#[test]
fn test_workbook_to_import_csv_结果可再次读取() {
    let bytes = std::fs::read(SUPPLIES_EXPORT).unwrap();
    let csv = workbook_to_import_csv(&bytes).unwrap();

    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["name", "quantity", "unitPrice", "category"]);

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 2);
    assert_eq!(&records[1][0], "Paper, A4");
    assert_eq!(&records[1][3], "紙");
}

#[test]
fn test_workbook_to_import_csv_空工作表() {
    let bytes = std::fs::read(EMPTY_EXPORT).unwrap();

    let err = workbook_to_import_csv(&bytes).unwrap_err();
    assert!(matches!(err, TransferError::MissingHeader));
}
