// ==========================================
// 补给品管理系统 - 页头与导航
// ==========================================

use crate::app::shell::Route;
use crate::i18n::t;

/// 渲染标题与导航,当前路由以 [ ] 标记
pub fn render_header(active: Route) -> String {
    let nav: Vec<String> = Route::ALL
        .iter()
        .map(|route| {
            let label = t(route.label_key());
            if *route == active {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect();

    format!("== {} ==\n{}\n", t("app.title"), nav.join(" "))
}
