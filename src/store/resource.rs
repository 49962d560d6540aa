// ==========================================
// 补给品管理系统 - 通用集合状态
// ==========================================
// 状态转换:
//   begin    → loading=true, error=None
//   成功     → data=结果, loading=false
//   失败     → error=本地化通用提示, loading=false（保留上一次 data）
//   unmount  → 作废所有进行中的获取
// ==========================================

use std::fmt::Display;
use std::future::Future;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, error};

use crate::i18n::t;

/// 对外暴露的只读快照
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSnapshot<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Vec<T>,
}

impl<T> Default for ResourceSnapshot<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: Vec::new(),
        }
    }
}

/// 获取票据（代次号）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

struct Inner<T> {
    snapshot: ResourceSnapshot<T>,
    generation: u64,
}

pub struct ResourceStore<T> {
    /// 资源名（日志用）
    name: &'static str,
    /// 获取失败时的提示 i18n 键
    error_key: &'static str,
    inner: Mutex<Inner<T>>,
}

impl<T: Clone> ResourceStore<T> {
    pub fn new(name: &'static str, error_key: &'static str) -> Self {
        Self {
            name,
            error_key,
            inner: Mutex::new(Inner {
                snapshot: ResourceSnapshot::default(),
                generation: 0,
            }),
        }
    }

    pub fn snapshot(&self) -> ResourceSnapshot<T> {
        self.lock().snapshot.clone()
    }

    /// 开始一次获取
    pub fn begin(&self) -> FetchTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.snapshot.loading = true;
        inner.snapshot.error = None;
        FetchTicket {
            generation: inner.generation,
        }
    }

    /// 写入获取结果
    ///
    /// # 返回
    /// - true: 结果已应用
    /// - false: 票据已过期（更新的获取或 unmount 之后到达）,结果被丢弃
    pub fn complete<E: Display>(&self, ticket: FetchTicket, result: Result<Vec<T>, E>) -> bool {
        let mut inner = self.lock();
        if ticket.generation != inner.generation {
            debug!(
                resource = self.name,
                ticket = ticket.generation,
                current = inner.generation,
                "丢弃过期响应"
            );
            return false;
        }

        match result {
            Ok(data) => {
                inner.snapshot.data = data;
                inner.snapshot.error = None;
            }
            Err(err) => {
                error!(resource = self.name, error = %err, "集合获取失败");
                inner.snapshot.error = Some(t(self.error_key));
            }
        }
        inner.snapshot.loading = false;
        true
    }

    /// 视图不再关心结果: 作废进行中的获取
    pub fn unmount(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.snapshot.loading = false;
    }

    /// 执行一次完整获取并返回最新快照
    pub async fn load<F, Fut, E>(&self, loader: F) -> ResourceSnapshot<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
        E: Display,
    {
        let ticket = self.begin();
        let result = loader().await;
        self.complete(ticket, result);
        self.snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // 快照只含纯数据,持锁线程 panic 后状态仍可用
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
