// ==========================================
// 补给品管理系统 - 应用外壳（路由）
// ==========================================
// 路由:
//   /           → 仪表盘
//   /supplies   → 补给品管理
//   /inventory  → 库存管理
// ==========================================

use std::fmt;

use crate::views::render_header;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Supplies,
    Inventory,
}

impl Route {
    /// 导航顺序
    pub const ALL: [Route; 3] = [Route::Dashboard, Route::Supplies, Route::Inventory];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Supplies => "/supplies",
            Route::Inventory => "/inventory",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Route::Dashboard => "nav.dashboard",
            Route::Supplies => "nav.supplies",
            Route::Inventory => "nav.inventory",
        }
    }

    /// 按路径匹配（忽略末尾斜杠）
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// 外壳: 持有当前路由并渲染页头
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    current: Route,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            current: Route::Dashboard,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    /// 导航到指定路径
    ///
    /// # 返回
    /// - Some(Route): 导航成功
    /// - None: 未知路径,保持当前路由
    pub fn navigate(&mut self, path: &str) -> Option<Route> {
        match Route::from_path(path) {
            Some(route) => {
                tracing::debug!(from = %self.current, to = %route, "路由切换");
                self.current = route;
                Some(route)
            }
            None => {
                tracing::warn!(path, "未知路由");
                None
            }
        }
    }

    pub fn navigate_to(&mut self, route: Route) {
        self.current = route;
    }

    pub fn render_header(&self) -> String {
        render_header(self.current)
    }
}
