//! 命令分发 领域层基础库（dispatcher-domain）
//!
//! 提供应用层分发命令时依赖的最小领域抽象：
//! - 领域事件能力约束（`domain_event`）
//! - 领域层统一错误（`error`）
//!
//! 本 crate 不依赖任何运行时与传输实现，处理器在领域规则被违反时返回 `DomainError`，
//! 由应用层统一转换为 `AppError`。
//!
pub mod domain_event;
pub mod error;
