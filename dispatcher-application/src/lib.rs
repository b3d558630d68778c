pub mod command;
pub mod command_dispatcher;
pub mod command_handler;
pub mod command_response;
pub mod error;
pub mod event_publisher;
pub mod handler_resolver;
pub mod inmemory_event_publisher;
pub mod inmemory_handler_resolver;

pub use command_dispatcher::CommandDispatcher;
pub use command_response::CommandAck;
pub use inmemory_event_publisher::InMemoryEventPublisher;
pub use inmemory_handler_resolver::InMemoryHandlerResolver;
