// ==========================================
// 页面集成测试辅助工具
// ==========================================
// 职责: 组装 假后端 → AppState → 页面控制器
// ==========================================

use std::sync::Arc;

use supply_manager::app::{AppState, InventoryManagementPage, SupplyManagementPage};

use super::fake_backend::FakeBackend;
use super::interaction::{RecordingNotifier, ScriptedConfirmer};

/// 页面测试环境
pub struct PageTestEnv {
    pub backend: Arc<FakeBackend>,
    pub state: AppState,
    pub notifier: Arc<RecordingNotifier>,
    pub confirmer: Arc<ScriptedConfirmer>,
}

impl PageTestEnv {
    /// 确认对话框一律同意
    pub fn new() -> Self {
        Self::with_confirmer(ScriptedConfirmer::accepting())
    }

    /// 确认对话框一律取消
    pub fn declining() -> Self {
        Self::with_confirmer(ScriptedConfirmer::declining())
    }

    fn with_confirmer(confirmer: ScriptedConfirmer) -> Self {
        supply_manager::logging::init_test();
        let backend = Arc::new(FakeBackend::new());
        Self {
            state: AppState::with_transport(backend.clone()),
            backend,
            notifier: Arc::new(RecordingNotifier::default()),
            confirmer: Arc::new(confirmer),
        }
    }

    pub fn supply_page(&self) -> SupplyManagementPage {
        SupplyManagementPage::new(&self.state, self.notifier.clone(), self.confirmer.clone())
    }

    pub fn inventory_page(&self) -> InventoryManagementPage {
        InventoryManagementPage::new(&self.state, self.notifier.clone())
    }
}
