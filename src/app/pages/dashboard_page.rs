// ==========================================
// 补给品管理系统 - 仪表盘页面
// ==========================================

use crate::app::shell::Route;
use crate::views::{dashboard_cards, render_dashboard, DashboardCard};

/// 仪表盘: 静态导航卡片,无数据获取
#[derive(Debug, Default, Clone, Copy)]
pub struct DashboardPage;

impl DashboardPage {
    pub fn new() -> Self {
        Self
    }

    pub fn cards(&self) -> Vec<DashboardCard> {
        dashboard_cards()
    }

    /// 卡片点击的跳转目标（说明卡片与越界索引为 None）
    pub fn open(&self, index: usize) -> Option<Route> {
        self.cards().get(index).and_then(|card| card.route)
    }

    pub fn render(&self) -> String {
        render_dashboard()
    }
}
