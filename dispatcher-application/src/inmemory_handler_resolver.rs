use crate::{
    command::Command, command_handler::CommandHandler, error::AppError,
    handler_resolver::CommandHandlerResolver,
};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, type_name};
use std::sync::Arc;
use tracing::{debug, warn};

struct HandlerEntry {
    // 注册时的命令类型名，用于类型不匹配时的诊断
    command_type: &'static str,
    // 实际存放 Arc<dyn CommandHandler<C>>
    handler: Box<dyn Any + Send + Sync>,
}

/// 基于内存的处理器注册表
/// - 以命令的稳定名称 `Command::NAME` 为键注册处理器
/// - 同名命令只允许注册一个处理器
pub struct InMemoryHandlerResolver {
    handlers: DashMap<&'static str, HandlerEntry>,
}

impl Default for InMemoryHandlerResolver {
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }
}

impl InMemoryHandlerResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器
    pub fn register<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        match self.handlers.entry(C::NAME) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegisteredCommand { command: C::NAME }),
            Entry::Vacant(slot) => {
                let handler: Arc<dyn CommandHandler<C>> = handler;
                slot.insert(HandlerEntry {
                    command_type: type_name::<C>(),
                    handler: Box::new(handler),
                });
                debug!(command = C::NAME, "command handler registered");
                Ok(())
            }
        }
    }

    /// 指定命令是否已有处理器
    pub fn is_registered<C: Command>(&self) -> bool {
        self.handlers.contains_key(C::NAME)
    }

    /// 获取已注册的命令名称列表（只读视图，按名称排序）
    pub fn registered_commands(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.iter().map(|e| *e.key()).collect();
        names.sort_unstable();
        names
    }
}

impl CommandHandlerResolver for InMemoryHandlerResolver {
    fn resolve<C>(&self, _cmd: &C) -> Result<Arc<dyn CommandHandler<C>>, AppError>
    where
        C: Command,
    {
        let Some(entry) = self.handlers.get(C::NAME) else {
            warn!(command = C::NAME, "no handler registered for command");
            return Err(AppError::HandlerNotFound(C::NAME));
        };

        // 同名但不同类型的命令会在这里被拒绝
        entry
            .handler
            .downcast_ref::<Arc<dyn CommandHandler<C>>>()
            .cloned()
            .ok_or(AppError::TypeMismatch {
                expected: type_name::<C>(),
                found: entry.command_type,
            })
    }
}
