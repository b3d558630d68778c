//! 内存版事件发布器（InMemoryEventPublisher）
//!
//! 基于 `tokio::sync::broadcast` 实现的轻量发布器，满足 `EventPublisher` 协议：
//! - `publish`：记录并广播事件；
//! - `subscribe`：返回 `'static` 生命周期事件流，便于在 `tokio::spawn` 中使用；
//! - `published`：按发布顺序返回已发布事件的快照；
//! - 典型用途：测试环境、示例与本地开发。
//!
//! 注意：
//! - 若无订阅者，广播将被忽略，但事件仍会被记录；
//! - 已发布事件的记录只增不减且不会被清理，不适合接入长期运行的进程。

use crate::error::AppError;
use crate::event_publisher::EventPublisher;
use async_trait::async_trait;
use dispatcher_domain::domain_event::DomainEvent;
use futures_core::stream::BoxStream;
use futures_util::StreamExt;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::trace;

/// 简单的内存事件发布器实现
#[derive(Clone)]
pub struct InMemoryEventPublisher<E> {
    tx: broadcast::Sender<E>,
    published: Arc<Mutex<Vec<E>>>,
}

impl<E> InMemoryEventPublisher<E>
where
    E: DomainEvent,
{
    /// 创建一个内存发布器，`capacity` 为广播缓冲区容量
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self {
            tx,
            published: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 订阅此后发布的事件
    pub fn subscribe(&self) -> BoxStream<'static, Result<E, AppError>> {
        let rx = self.tx.subscribe();
        let stream =
            BroadcastStream::new(rx).map(|r| r.map_err(|e| AppError::Infra(e.to_string())));
        Box::pin(stream)
    }

    /// 已发布事件的快照（按发布顺序）
    pub fn published(&self) -> Vec<E> {
        self.records().to_vec()
    }

    fn records(&self) -> MutexGuard<'_, Vec<E>> {
        // 记录只做追加，持锁线程 panic 后数据仍然可用
        self.published
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<E> EventPublisher<E> for InMemoryEventPublisher<E>
where
    E: DomainEvent,
{
    async fn publish(&self, event: &E) -> Result<(), AppError> {
        trace!(event_type = event.event_type(), "publishing event");
        self.records().push(event.clone());
        // 若当前无订阅者，broadcast 的 send 会返回错误，这里视为非致命并忽略
        let _ = self.tx.send(event.clone());
        Ok(())
    }
}
