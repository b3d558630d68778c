//! 领域层统一错误定义
//!
//! 聚焦命令校验、状态校验与事件发布的最小必要集合，
//! 便于在应用层统一转换为 `AppError`。
//!
use thiserror::Error;

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    // --- 领域规则/命令与状态 ---
    #[error("invalid command: {reason}")]
    InvalidCommand { reason: String },
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },

    // --- 事件发布 ---
    #[error("event publish error: {reason}")]
    EventPublish { reason: String },
}

impl DomainError {
    pub fn invalid_command(reason: impl Into<String>) -> Self {
        Self::InvalidCommand {
            reason: reason.into(),
        }
    }

    pub fn invalid_state(reason: impl Into<String>) -> Self {
        Self::InvalidState {
            reason: reason.into(),
        }
    }

    pub fn event_publish(reason: impl Into<String>) -> Self {
        Self::EventPublish {
            reason: reason.into(),
        }
    }
}
