// ==========================================
// 补给品管理系统 - 库存流水集合
// ==========================================

use crate::domain::InventoryTransaction;
use crate::services::InventoryService;
use crate::store::resource::{ResourceSnapshot, ResourceStore};

pub struct TransactionStore {
    service: InventoryService,
    state: ResourceStore<InventoryTransaction>,
}

impl TransactionStore {
    pub fn new(service: InventoryService) -> Self {
        Self {
            service,
            state: ResourceStore::new("inventory_transactions", "inventory.fetch_failed"),
        }
    }

    pub async fn mount(&self) -> ResourceSnapshot<InventoryTransaction> {
        self.refetch().await
    }

    pub async fn refetch(&self) -> ResourceSnapshot<InventoryTransaction> {
        self.state.load(|| self.service.get_all()).await
    }

    pub fn unmount(&self) {
        self.state.unmount();
    }

    pub fn snapshot(&self) -> ResourceSnapshot<InventoryTransaction> {
        self.state.snapshot()
    }
}
