// ==========================================
// 补给品管理系统 - 表单渲染
// ==========================================

use crate::forms::FormState;
use crate::i18n::t;

/// 渲染表单标题、各字段标签与当前值
pub fn render_form(title_key: &str, state: &FormState) -> String {
    let mut out = format!("{}\n", t(title_key));
    for (spec, value) in state.entries() {
        let marker = if spec.required { "*" } else { "" };
        out.push_str(&format!("  {}{}: {}\n", t(spec.label_key), marker, value));
    }
    out
}
