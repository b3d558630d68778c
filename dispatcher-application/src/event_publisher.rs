use crate::error::AppError;
use async_trait::async_trait;

/// 事件发布器（Event Publisher）
///
/// - 逐条发布处理器响应中携带的领域事件；
/// - 发布失败的错误由实现自行定义，分发器原样向上传播；
/// - 可对接消息中间件、进程内广播等任意实现。
#[async_trait]
pub trait EventPublisher<E>: Send + Sync {
    async fn publish(&self, event: &E) -> Result<(), AppError>;
}
