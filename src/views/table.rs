// ==========================================
// 补给品管理系统 - 文本表格
// ==========================================
// 列宽按终端显示宽度计算（东亚宽字符占 2 列）
// ==========================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 追加一行; 列数不足时补空,多余列忽略
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| display_width(h)).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(cell));
            }
        }

        let mut out = String::new();
        out.push_str(&render_line(&self.headers, &widths));
        out.push_str(&render_separator(&widths));
        for row in &self.rows {
            out.push_str(&render_line(row, &widths));
        }
        out
    }
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}

fn render_separator(widths: &[usize]) -> String {
    let parts: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("{}\n", parts.join("-+-"))
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(cell));
    format!("{}{}", cell, " ".repeat(fill))
}

/// 东亚宽字符区间（Wide / Fullwidth）
const WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115F),   // 谚文字母
    (0x2E80, 0x303E),   // CJK 部首、符号与标点
    (0x3041, 0x33FF),   // 假名、注音、CJK 兼容
    (0x3400, 0x4DBF),   // CJK 扩展 A
    (0x4E00, 0x9FFF),   // CJK 统一汉字
    (0xA000, 0xA4CF),   // 彝文
    (0xAC00, 0xD7A3),   // 谚文音节
    (0xF900, 0xFAFF),   // CJK 兼容汉字
    (0xFE30, 0xFE4F),   // CJK 兼容形式
    (0xFF00, 0xFF60),   // 全角 ASCII
    (0xFFE0, 0xFFE6),   // 全角符号（￥ 等）
    (0x1F300, 0x1F64F), // 表情符号
    (0x1F900, 0x1F9FF),
    (0x20000, 0x2FFFD), // CJK 扩展 B 以后
    (0x30000, 0x3FFFD),
];

/// 单个字符的终端显示宽度
fn char_width(c: char) -> usize {
    let code = c as u32;
    if WIDE_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&code))
    {
        2
    } else {
        1
    }
}

/// 终端显示宽度（东亚宽字符 2 列,其余 1 列）
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_renders_header_only() {
        let table = TextTable::new(["ID", "Name"]);
        let rendered = table.render();
        assert_eq!(rendered.lines().count(), 2);
        assert_eq!(table.row_count(), 0);
        assert!(rendered.starts_with("ID | Name"));
    }

    #[test]
    fn test_columns_aligned() {
        let mut table = TextTable::new(["ID", "品名"]);
        table.push_row(vec!["1".to_string(), "ボールペン".to_string()]);
        table.push_row(vec!["100".to_string(), "A".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID  | 品名");
        assert_eq!(lines[1], "----+-----------");
        assert_eq!(lines[2], "1   | ボールペン");
        assert_eq!(lines[3], "100 | A");
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("補給"), 4);
        assert_eq!(display_width("ボールペン"), 10);
        // 半角符号与全角符号
        assert_eq!(display_width("¥150.5"), 6);
        assert_eq!(display_width("￥"), 2);
        assert_eq!(display_width("é"), 1);
    }

    #[test]
    fn test_price_column_aligned() {
        let mut table = TextTable::new(["単価", "ID"]);
        table.push_row(vec!["¥150.5".to_string(), "1".to_string()]);
        table.push_row(vec!["¥1200".to_string(), "2".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "単価   | ID");
        assert_eq!(lines[2], "¥150.5 | 1");
        assert_eq!(lines[3], "¥1200  | 2");
    }
}
