// ==========================================
// 补给品管理系统 - 补给品集合
// ==========================================
// 页面打开时获取,提供 loading / error 状态和手动 refetch
// ==========================================

use crate::domain::Supply;
use crate::services::SupplyService;
use crate::store::resource::{ResourceSnapshot, ResourceStore};

pub struct SupplyStore {
    service: SupplyService,
    state: ResourceStore<Supply>,
}

impl SupplyStore {
    pub fn new(service: SupplyService) -> Self {
        Self {
            service,
            state: ResourceStore::new("supplies", "supply.fetch_failed"),
        }
    }

    /// 页面打开
    pub async fn mount(&self) -> ResourceSnapshot<Supply> {
        self.refetch().await
    }

    /// 重新获取全部补给品
    pub async fn refetch(&self) -> ResourceSnapshot<Supply> {
        self.state.load(|| self.service.get_all()).await
    }

    /// 页面关闭
    pub fn unmount(&self) {
        self.state.unmount();
    }

    pub fn snapshot(&self) -> ResourceSnapshot<Supply> {
        self.state.snapshot()
    }

    /// 在当前快照中查找
    pub fn find(&self, id: i64) -> Option<Supply> {
        self.state.snapshot().data.into_iter().find(|s| s.id == id)
    }
}
