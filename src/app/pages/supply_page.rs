// ==========================================
// 补给品管理系统 - 补给品管理页面
// ==========================================
// 状态:
//   List  → 一览表
//   Form  → 新建/编辑表单（编辑选择保存在 SupplyForm 中）
// 每次变更成功后整体 refetch,不做本地合并
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::app::interaction::{Confirmer, Notifier};
use crate::app::pages::render_status;
use crate::app::state::{get_default_export_path, AppState};
use crate::domain::Supply;
use crate::forms::{FormError, FormResult, SupplyForm};
use crate::i18n::{t, t_with_args};
use crate::services::SupplyService;
use crate::store::{ResourceSnapshot, SupplyStore};
use crate::transfer::workbook_to_import_csv;
use crate::views::{render_form, render_supply_table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Form,
}

pub struct SupplyManagementPage {
    service: SupplyService,
    store: SupplyStore,
    notifier: Arc<dyn Notifier>,
    confirmer: Arc<dyn Confirmer>,
    mode: ViewMode,
    form: Option<SupplyForm>,
}

impl SupplyManagementPage {
    pub fn new(state: &AppState, notifier: Arc<dyn Notifier>, confirmer: Arc<dyn Confirmer>) -> Self {
        Self {
            service: state.supply_service.clone(),
            store: SupplyStore::new(state.supply_service.clone()),
            notifier,
            confirmer,
            mode: ViewMode::List,
            form: None,
        }
    }

    /// 页面打开: 获取一览
    pub async fn mount(&self) -> ResourceSnapshot<Supply> {
        self.store.mount().await
    }

    pub fn unmount(&self) {
        self.store.unmount();
    }

    pub fn snapshot(&self) -> ResourceSnapshot<Supply> {
        self.store.snapshot()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn form(&self) -> Option<&SupplyForm> {
        self.form.as_ref()
    }

    /// 修改表单字段
    ///
    /// # 返回
    /// 表单未打开时返回 `FormError::FormClosed`
    pub fn set_field(&mut self, name: &str, raw: &str) -> FormResult<()> {
        match self.form.as_mut() {
            Some(form) => form.set(name, raw),
            None => {
                warn!(field = name, "表单未打开,忽略输入");
                Err(FormError::FormClosed)
            }
        }
    }

    /// 打开新建表单
    pub fn open_create(&mut self) {
        self.form = Some(SupplyForm::create());
        self.mode = ViewMode::Form;
    }

    /// 打开编辑表单
    ///
    /// 优先使用已加载的一览记录,不在一览中时单独查询
    ///
    /// # 返回
    /// - true: 表单已打开
    /// - false: 记录获取失败（已提示）
    pub async fn open_edit(&mut self, id: i64) -> bool {
        let supply = match self.store.find(id) {
            Some(supply) => supply,
            None => match self.service.get_by_id(id).await {
                Ok(supply) => supply,
                Err(err) => {
                    error!(id, error = %err, "补给品获取失败");
                    self.notifier
                        .alert(&t_with_args("supply.not_found", &[("id", &id.to_string())]));
                    return false;
                }
            },
        };

        self.form = Some(SupplyForm::edit(&supply));
        self.mode = ViewMode::Form;
        true
    }

    /// 取消编辑,回到一览
    pub fn cancel(&mut self) {
        self.form = None;
        self.mode = ViewMode::List;
    }

    /// 提交表单
    ///
    /// 编辑选择存在时更新,否则新建; 成功后关闭表单并 refetch,
    /// 失败时提示并停留在表单
    ///
    /// # 返回
    /// - Some(Supply): 服务端返回的保存结果
    /// - None: 表单未打开、校验失败或保存失败
    pub async fn submit(&mut self) -> Option<Supply> {
        let Some(form) = self.form.as_ref() else {
            warn!("表单未打开,忽略提交");
            return None;
        };

        let data = match form.to_form_data() {
            Ok(data) => data,
            Err(err) => {
                warn!(field = err.field(), error = %err, "表单校验失败");
                self.notifier.alert(&t("supply.save_failed"));
                return None;
            }
        };

        let result = match form.editing_id() {
            Some(id) => self.service.update(id, &data).await,
            None => self.service.create(&data).await,
        };

        match result {
            Ok(saved) => {
                info!(id = saved.id, "补给品已保存");
                self.cancel();
                self.store.refetch().await;
                Some(saved)
            }
            Err(err) => {
                error!(error = %err, "补给品保存失败");
                self.notifier.alert(&t("supply.save_failed"));
                None
            }
        }
    }

    /// 删除补给品（需用户确认）
    ///
    /// # 返回
    /// - true: 已删除并 refetch
    /// - false: 用户取消（不发请求）或删除失败（已提示）
    pub async fn delete(&self, id: i64) -> bool {
        if !self.confirmer.confirm(&t("supply.confirm_delete")) {
            info!(id, "用户取消删除");
            return false;
        }

        match self.service.delete(id).await {
            Ok(()) => {
                self.store.refetch().await;
                true
            }
            Err(err) => {
                error!(id, error = %err, "补给品删除失败");
                self.notifier.alert(&t("supply.delete_failed"));
                false
            }
        }
    }

    /// 下载 Excel 并保存到文件（默认: 下载目录/supplies.xlsx）
    pub async fn export(&self, path: Option<&Path>) -> Option<PathBuf> {
        let bytes = self.download_export().await?;
        self.save_workbook(&bytes, path).await
    }

    /// 下载 Excel 并转换为导入用 CSV
    pub async fn export_import_csv(&self, path: &Path) -> Option<PathBuf> {
        let bytes = self.download_export().await?;
        self.save_import_csv(&bytes, path).await
    }

    /// 下载一次 Excel,同时保存工作簿与导入用 CSV
    ///
    /// # 返回
    /// (工作簿路径, CSV 路径); 任一步失败时为 None（已提示）
    pub async fn export_with_import_csv(
        &self,
        path: Option<&Path>,
        csv_path: &Path,
    ) -> Option<(PathBuf, PathBuf)> {
        let bytes = self.download_export().await?;
        let workbook = self.save_workbook(&bytes, path).await?;
        let csv = self.save_import_csv(&bytes, csv_path).await?;
        Some((workbook, csv))
    }

    async fn download_export(&self) -> Option<Vec<u8>> {
        match self.service.export_excel().await {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                error!(error = %err, "Excel 导出失败");
                self.notifier.alert(&t("supply.export_failed"));
                None
            }
        }
    }

    async fn save_workbook(&self, bytes: &[u8], path: Option<&Path>) -> Option<PathBuf> {
        let target = path
            .map(Path::to_path_buf)
            .unwrap_or_else(get_default_export_path);

        if let Err(err) = tokio::fs::write(&target, bytes).await {
            error!(path = %target.display(), error = %err, "导出文件写入失败");
            self.notifier.alert(&t("supply.export_failed"));
            return None;
        }

        let shown = target.display().to_string();
        self.notifier
            .info(&t_with_args("supply.exported", &[("path", &shown)]));
        Some(target)
    }

    async fn save_import_csv(&self, bytes: &[u8], path: &Path) -> Option<PathBuf> {
        let csv = match workbook_to_import_csv(bytes) {
            Ok(csv) => csv,
            Err(err) => {
                error!(error = %err, "导入用 CSV 生成失败");
                self.notifier.alert(&t("supply.export_failed"));
                return None;
            }
        };

        if let Err(err) = tokio::fs::write(path, csv).await {
            error!(path = %path.display(), error = %err, "CSV 文件写入失败");
            self.notifier.alert(&t("supply.export_failed"));
            return None;
        }

        let shown = path.display().to_string();
        self.notifier
            .info(&t_with_args("supply.exported", &[("path", &shown)]));
        Some(path.to_path_buf())
    }

    /// 上传 CSV 并 refetch
    ///
    /// # 返回
    /// 服务端给出的处理结果文本; 失败时为 None（已提示）
    pub async fn import(&self, path: &Path) -> Option<String> {
        match self.service.import_csv_file(path).await {
            Ok(summary) => {
                let shown = path.display().to_string();
                self.notifier
                    .info(&t_with_args("supply.imported", &[("path", &shown)]));
                self.store.refetch().await;
                Some(summary)
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "CSV 导入失败");
                self.notifier.alert(&t("supply.import_failed"));
                None
            }
        }
    }

    /// 渲染当前视图
    pub fn render(&self) -> String {
        if let (ViewMode::Form, Some(form)) = (self.mode, self.form.as_ref()) {
            return render_form(form.title_key(), form.state());
        }

        let snapshot = self.store.snapshot();
        if let Some(status) = render_status(&snapshot) {
            return status;
        }
        format!("{}\n{}", t("supply.list_title"), render_supply_table(&snapshot.data))
    }
}
