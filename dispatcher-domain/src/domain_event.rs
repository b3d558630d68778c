use std::fmt;

/// 领域事件需要满足的通用能力边界
///
/// 分发器本身不关心事件结构；该约束仅供需要识别事件的组件（如内存发布器的日志）使用。
pub trait DomainEvent: Clone + fmt::Debug + Send + Sync + 'static {
    /// 事件类型（形如 `UserEvent.Registered` 或自定义类型名）
    fn event_type(&self) -> &str;
}
