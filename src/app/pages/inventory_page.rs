// ==========================================
// 补给品管理系统 - 库存管理页面
// ==========================================
// 加载补给品（选择器用）和入出库履历
// 登记成功后: 表单复位 → refetch 履历 → refetch 补给品（在库数以服务端为准）
// 红线: 不在客户端判断库存是否足够
// ==========================================

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::app::interaction::Notifier;
use crate::app::pages::render_status;
use crate::app::state::AppState;
use crate::domain::{InventoryTransaction, Supply};
use crate::forms::{FormError, FormResult, StockMovementForm};
use crate::i18n::t;
use crate::services::InventoryService;
use crate::store::{ResourceSnapshot, SupplyStore, TransactionStore};
use crate::views::{render_form, render_transaction_table};

pub struct InventoryManagementPage {
    service: InventoryService,
    supplies: SupplyStore,
    transactions: TransactionStore,
    notifier: Arc<dyn Notifier>,
    form: StockMovementForm,
}

impl InventoryManagementPage {
    pub fn new(state: &AppState, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            service: state.inventory_service.clone(),
            supplies: SupplyStore::new(state.supply_service.clone()),
            transactions: TransactionStore::new(state.inventory_service.clone()),
            notifier,
            form: StockMovementForm::new(),
        }
    }

    /// 页面打开: 依次获取补给品与履历
    pub async fn mount(&self) {
        self.supplies.mount().await;
        self.transactions.mount().await;
    }

    pub fn unmount(&self) {
        self.supplies.unmount();
        self.transactions.unmount();
    }

    pub fn supplies(&self) -> ResourceSnapshot<Supply> {
        self.supplies.snapshot()
    }

    pub fn transactions(&self) -> ResourceSnapshot<InventoryTransaction> {
        self.transactions.snapshot()
    }

    pub fn form(&self) -> &StockMovementForm {
        &self.form
    }

    /// 修改表单字段; supplyId 只能选择已加载的补给品
    pub fn set_field(&mut self, name: &str, raw: &str) -> FormResult<()> {
        if name == "supplyId" {
            if let Ok(supply_id) = raw.trim().parse::<i64>() {
                self.ensure_loaded_supply(supply_id)?;
            }
        }
        self.form.set(name, raw)
    }

    fn ensure_loaded_supply(&self, supply_id: i64) -> FormResult<()> {
        let loaded = self
            .supplies
            .snapshot()
            .data
            .iter()
            .any(|supply| supply.id == supply_id);
        if loaded {
            Ok(())
        } else {
            Err(FormError::InvalidChoice {
                field: "supplyId".to_string(),
                value: supply_id.to_string(),
            })
        }
    }

    /// 选择器选项: (补给品ID, "品名 (在库: n)")
    pub fn supply_options(&self) -> Vec<(i64, String)> {
        self.supplies
            .snapshot()
            .data
            .iter()
            .map(|s| (s.id, format!("{} ({}: {})", s.name, t("supply.field_quantity"), s.quantity)))
            .collect()
    }

    /// 按表单种别登记入库/出库
    ///
    /// # 返回
    /// - Some(流水): 登记成功,表单已复位,履历与补给品已 refetch
    /// - None: 校验或服务端拒绝（已提示,表单保留输入）
    pub async fn submit(&mut self) -> Option<InventoryTransaction> {
        let checked = self.form.to_request().and_then(|request| {
            self.ensure_loaded_supply(request.supply_id)?;
            Ok(request)
        });
        let request = match checked {
            Ok(request) => request,
            Err(err) => {
                warn!(field = err.field(), error = %err, "入出库表单校验失败");
                self.notifier.alert(&t("inventory.submit_failed"));
                return None;
            }
        };

        match self.service.submit(&request).await {
            Ok(transaction) => {
                info!(
                    transaction_id = transaction.id,
                    supply_id = transaction.supply_id,
                    "入出库登记成功"
                );
                self.form.reset();
                self.transactions.refetch().await;
                self.supplies.refetch().await;
                Some(transaction)
            }
            Err(err) => {
                error!(
                    supply_id = request.supply_id,
                    quantity = request.quantity,
                    error = %err,
                    "入出库登记失败"
                );
                self.notifier.alert(&t("inventory.submit_failed"));
                None
            }
        }
    }

    /// 指定补给品的入出库履历
    pub async fn history(&self, supply_id: i64) -> Option<Vec<InventoryTransaction>> {
        match self.service.get_by_supply_id(supply_id).await {
            Ok(transactions) => Some(transactions),
            Err(err) => {
                error!(supply_id, error = %err, "补给品履历获取失败");
                self.notifier.alert(&t("inventory.fetch_failed"));
                None
            }
        }
    }

    /// 渲染登记表单与履历
    pub fn render(&self) -> String {
        let mut out = render_form("inventory.form_title", self.form.state());
        out.push('\n');
        out.push_str(&format!("{}\n", t("inventory.list_title")));

        let snapshot = self.transactions.snapshot();
        match render_status(&snapshot) {
            Some(status) => out.push_str(&status),
            None => out.push_str(&render_transaction_table(&snapshot.data)),
        }
        out
    }
}
