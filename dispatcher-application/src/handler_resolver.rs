use crate::{command::Command, command_handler::CommandHandler, error::AppError};
use std::sync::Arc;

/// 处理器解析器（Handler Resolver）
///
/// - 负责为给定命令找到对应的处理器；
/// - 找不到时返回 [`AppError::HandlerNotFound`]；
/// - 该 trait 带有泛型方法，通常以具体实现类型注入使用。
pub trait CommandHandlerResolver: Send + Sync {
    fn resolve<C>(&self, cmd: &C) -> Result<Arc<dyn CommandHandler<C>>, AppError>
    where
        C: Command;
}
