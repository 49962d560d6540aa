// ==========================================
// 补给品管理系统 - 补给品 Service
// ==========================================
// 资源: /supplies
// 操作: 列表 / 详情 / 新建 / 更新 / 删除 / CSV 导入 / Excel 导出
// ==========================================

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::client::{ApiRequest, ClientResult, FilePart, Transport};
use crate::domain::{Supply, SupplyFormData};
use crate::services::SUPPLIES_PATH;

/// 导出文件的默认文件名
pub const EXPORT_FILE_NAME: &str = "supplies.xlsx";

/// 上传表单中的文件字段名
const IMPORT_FIELD: &str = "file";

#[derive(Clone)]
pub struct SupplyService {
    transport: Arc<dyn Transport>,
}

impl SupplyService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// 查询补给品列表
    pub async fn get_all(&self) -> ClientResult<Vec<Supply>> {
        let supplies: Vec<Supply> = self
            .transport
            .send(ApiRequest::get(SUPPLIES_PATH))
            .await?
            .json()?;
        debug!(count = supplies.len(), "补给品列表已获取");
        Ok(supplies)
    }

    /// 查询补给品详情
    ///
    /// id 不存在时的行为由服务端决定（通常为 404,表现为 ClientError::Status）
    pub async fn get_by_id(&self, id: i64) -> ClientResult<Supply> {
        self.transport
            .send(ApiRequest::get(item_path(id)))
            .await?
            .json()
    }

    /// 新建补给品
    pub async fn create(&self, data: &SupplyFormData) -> ClientResult<Supply> {
        let request = ApiRequest::post_json(SUPPLIES_PATH, data)?;
        let created: Supply = self.transport.send(request).await?.json()?;
        info!(id = created.id, name = %created.name, "补给品已创建");
        Ok(created)
    }

    /// 更新补给品（四个可编辑字段整体替换）
    pub async fn update(&self, id: i64, data: &SupplyFormData) -> ClientResult<Supply> {
        let request = ApiRequest::put_json(item_path(id), data)?;
        let updated: Supply = self.transport.send(request).await?.json()?;
        info!(id = updated.id, name = %updated.name, "补给品已更新");
        Ok(updated)
    }

    /// 删除补给品（响应体忽略）
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.transport.send(ApiRequest::delete(item_path(id))).await?;
        info!(id, "补给品已删除");
        Ok(())
    }

    /// 以 multipart 上传 CSV 文件
    ///
    /// # 返回
    /// 服务端给出的处理结果文本（格式由服务端定义）
    pub async fn import_csv(&self, file: FilePart) -> ClientResult<String> {
        let path = format!("{}/import", SUPPLIES_PATH);
        let file_name = file.file_name.clone();
        let summary = self
            .transport
            .send(ApiRequest::post_file(path, file))
            .await?
            .text();
        info!(file = %file_name, "CSV 导入已提交");
        Ok(summary)
    }

    /// 读取本地文件并上传
    pub async fn import_csv_file(&self, path: &Path) -> ClientResult<String> {
        let part = FilePart::from_path(IMPORT_FIELD, path).await?;
        self.import_csv(part).await
    }

    /// 下载 Excel 导出文件（字节原样返回,不做解析）
    pub async fn export_excel(&self) -> ClientResult<Vec<u8>> {
        let path = format!("{}/export", SUPPLIES_PATH);
        let bytes = self.transport.send(ApiRequest::get(path)).await?.into_bytes();
        debug!(bytes = bytes.len(), "Excel 导出已下载");
        Ok(bytes)
    }
}

fn item_path(id: i64) -> String {
    format!("{}/{}", SUPPLIES_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_path() {
        assert_eq!(item_path(12), "/supplies/12");
    }
}
