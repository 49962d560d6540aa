// ==========================================
// 补给品管理系统 - 用户交互抽象
// ==========================================
// 页面只通过这两个 trait 与用户交互:
// - Notifier: 阻塞式提示（失败通知等）
// - Confirmer: 是/否确认（删除前的确认门）
// ==========================================

/// 提示通道
pub trait Notifier: Send + Sync {
    /// 错误提示
    fn alert(&self, message: &str);

    /// 普通信息（默认忽略）
    fn info(&self, _message: &str) {}
}

/// 确认通道
pub trait Confirmer: Send + Sync {
    /// 返回 true 表示用户明确同意
    fn confirm(&self, message: &str) -> bool;
}

/// 无条件同意（命令行 --yes）
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirmer for AssumeYes {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(message, "已跳过确认");
        true
    }
}
