//! 命令分发器（CommandDispatcher）
//!
//! 编排一次命令的完整处理流程：
//! - 通过解析器为命令找到处理器；
//! - 调用处理器得到响应；
//! - 若配置了事件发布器，按顺序逐条发布响应中携带的领域事件；
//! - 原样返回处理器的响应。
//!
//! 分发器不拦截、不转换任何错误，解析、处理与发布阶段的错误都直接返回给调用方。
//!
use crate::{
    command::Command, command_response::CommandResponse, error::AppError,
    event_publisher::EventPublisher, handler_resolver::CommandHandlerResolver,
};
use bon::Builder;
use std::sync::Arc;
use tracing::debug;

/// CommandDispatcher：
/// - `resolver` 必填，负责命令到处理器的映射
/// - `publisher` 可选，未配置时完全跳过事件处理
#[derive(Builder)]
pub struct CommandDispatcher<R, E> {
    resolver: R,
    publisher: Option<Arc<dyn EventPublisher<E>>>,
}

impl<R, E> CommandDispatcher<R, E>
where
    R: CommandHandlerResolver,
    E: Send + Sync + 'static,
{
    /// 创建不带事件发布器的分发器
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            publisher: None,
        }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn has_publisher(&self) -> bool {
        self.publisher.is_some()
    }

    /// 分发命令到对应处理器，并转发响应中的事件
    pub async fn dispatch<C>(&self, cmd: C) -> Result<C::Response, AppError>
    where
        C: Command,
        C::Response: CommandResponse<Event = E>,
    {
        let handler = self.resolver.resolve(&cmd)?;

        debug!(command = C::NAME, "dispatching command");
        let response = handler.handle(cmd).await?;

        // 未配置发布器时不读取响应中的事件
        let Some(publisher) = self.publisher.as_ref() else {
            return Ok(response);
        };

        let events = response.events().unwrap_or_default();
        for event in events {
            publisher.publish(event).await?;
        }

        if !events.is_empty() {
            debug!(
                command = C::NAME,
                events = events.len(),
                "command events published"
            );
        }

        Ok(response)
    }
}
