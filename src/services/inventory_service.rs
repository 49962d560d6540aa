// ==========================================
// 补给品管理系统 - 库存流水 Service
// ==========================================
// 资源: /inventory
// 红线: 不在客户端校验库存是否足够,出库超量由服务端拒绝
// ==========================================

use std::sync::Arc;

use tracing::{debug, info};

use crate::client::{ApiRequest, ClientResult, Transport};
use crate::domain::{InventoryTransaction, InventoryTransactionRequest, TransactionType};
use crate::services::INVENTORY_PATH;

#[derive(Clone)]
pub struct InventoryService {
    transport: Arc<dyn Transport>,
}

impl InventoryService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// 查询全部流水
    pub async fn get_all(&self) -> ClientResult<Vec<InventoryTransaction>> {
        let transactions: Vec<InventoryTransaction> = self
            .transport
            .send(ApiRequest::get(INVENTORY_PATH))
            .await?
            .json()?;
        debug!(count = transactions.len(), "库存流水已获取");
        Ok(transactions)
    }

    /// 入库登记
    pub async fn stock_in(
        &self,
        request: &InventoryTransactionRequest,
    ) -> ClientResult<InventoryTransaction> {
        self.post_movement("in", request).await
    }

    /// 出库登记
    pub async fn stock_out(
        &self,
        request: &InventoryTransactionRequest,
    ) -> ClientResult<InventoryTransaction> {
        self.post_movement("out", request).await
    }

    /// 按请求中的类型分派到入库/出库
    pub async fn submit(
        &self,
        request: &InventoryTransactionRequest,
    ) -> ClientResult<InventoryTransaction> {
        match request.transaction_type {
            TransactionType::In => self.stock_in(request).await,
            TransactionType::Out => self.stock_out(request).await,
        }
    }

    /// 查询指定补给品的流水
    pub async fn get_by_supply_id(&self, supply_id: i64) -> ClientResult<Vec<InventoryTransaction>> {
        let path = format!("{}/supply/{}", INVENTORY_PATH, supply_id);
        let transactions: Vec<InventoryTransaction> =
            self.transport.send(ApiRequest::get(path)).await?.json()?;
        debug!(supply_id, count = transactions.len(), "补给品流水已获取");
        Ok(transactions)
    }

    async fn post_movement(
        &self,
        direction: &str,
        request: &InventoryTransactionRequest,
    ) -> ClientResult<InventoryTransaction> {
        let path = format!("{}/{}", INVENTORY_PATH, direction);
        let transaction: InventoryTransaction = self
            .transport
            .send(ApiRequest::post_json(path, request)?)
            .await?
            .json()?;
        info!(
            supply_id = request.supply_id,
            quantity = request.quantity,
            "{} 登记完成: transaction_id={}",
            transaction.transaction_type,
            transaction.id
        );
        Ok(transaction)
    }
}
