// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持日语（默认）、英文和中文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "ja";

/// 已提供翻译的语言
pub const SUPPORTED_LOCALES: &[&str] = &["ja", "en", "zh-CN"];

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"ja"、"en" 或 "zh-CN"）
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 设置语言; 不支持的语言回退到默认语言
///
/// # 返回
/// 实际生效的语言代码
pub fn apply_locale(locale: &str) -> &'static str {
    let resolved = SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|supported| supported.eq_ignore_ascii_case(locale.trim()))
        .unwrap_or_else(|| {
            tracing::warn!(locale, fallback = DEFAULT_LOCALE, "不支持的语言,使用默认语言");
            DEFAULT_LOCALE
        });
    set_locale(resolved);
    resolved
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use supply_manager::i18n::t;
/// let msg = t("common.loading");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use supply_manager::i18n::t_with_args;
/// let msg = t_with_args("supply.exported", &[("path", "/tmp/supplies.xlsx")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
