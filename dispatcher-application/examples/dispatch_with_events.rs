use async_trait::async_trait;
use dispatcher_application::command::Command;
use dispatcher_application::command_handler::CommandHandler;
use dispatcher_application::error::AppError;
use dispatcher_application::event_publisher::EventPublisher;
use dispatcher_application::{
    CommandAck, CommandDispatcher, InMemoryEventPublisher, InMemoryHandlerResolver,
};
use dispatcher_domain::domain_event::DomainEvent;
use dispatcher_domain::error::DomainError;
use futures_util::StreamExt;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, PartialEq)]
enum UserEvent {
    Created { name: String },
    Deleted { id: u32 },
}

impl DomainEvent for UserEvent {
    fn event_type(&self) -> &str {
        match self {
            UserEvent::Created { .. } => "UserEvent.Created",
            UserEvent::Deleted { .. } => "UserEvent.Deleted",
        }
    }
}

#[derive(Debug)]
struct CreateUser {
    name: String,
}

impl Command for CreateUser {
    const NAME: &'static str = "user.create";
    type Response = CommandAck<UserEvent>;
}

struct CreateUserHandler;

#[async_trait]
impl CommandHandler<CreateUser> for CreateUserHandler {
    async fn handle(&self, cmd: CreateUser) -> Result<CommandAck<UserEvent>, AppError> {
        if cmd.name.trim().is_empty() {
            return Err(DomainError::invalid_command("name must not be blank").into());
        }
        Ok(CommandAck::ok_with_events(vec![UserEvent::Created {
            name: cmd.name,
        }]))
    }
}

#[derive(Debug)]
struct DeleteUser {
    id: u32,
}

impl Command for DeleteUser {
    const NAME: &'static str = "user.delete";
    type Response = CommandAck<UserEvent>;
}

struct DeleteUserHandler;

#[async_trait]
impl CommandHandler<DeleteUser> for DeleteUserHandler {
    async fn handle(&self, cmd: DeleteUser) -> Result<CommandAck<UserEvent>, AppError> {
        Ok(CommandAck::ok_with_events(vec![UserEvent::Deleted { id: cmd.id }]))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let resolver = InMemoryHandlerResolver::new();
    resolver.register::<CreateUser, _>(Arc::new(CreateUserHandler))?;
    resolver.register::<DeleteUser, _>(Arc::new(DeleteUserHandler))?;
    println!("registered: {:?}", resolver.registered_commands());

    let publisher = Arc::new(InMemoryEventPublisher::<UserEvent>::new(16));
    let mut events = publisher.subscribe();
    let listener = tokio::spawn(async move {
        while let Some(Ok(event)) = events.next().await {
            println!("event: {} {:?}", event.event_type(), event);
        }
    });

    let dispatcher = CommandDispatcher::builder()
        .resolver(resolver)
        .publisher(publisher.clone() as Arc<dyn EventPublisher<UserEvent>>)
        .build();

    dispatcher
        .dispatch(CreateUser {
            name: "Alice".into(),
        })
        .await?;
    dispatcher.dispatch(DeleteUser { id: 42 }).await?;

    // 领域校验失败 -> 处理器错误原样返回
    if let Err(err) = dispatcher.dispatch(CreateUser { name: " ".into() }).await {
        eprintln!("rejected as expected: {err}");
    }

    // 未注册的命令 -> 返回 HandlerNotFound 错误
    #[derive(Debug)]
    struct RenameUser;

    impl Command for RenameUser {
        const NAME: &'static str = "user.rename";
        type Response = CommandAck<UserEvent>;
    }

    if let Err(AppError::HandlerNotFound(name)) = dispatcher.dispatch(RenameUser).await {
        eprintln!("HandlerNotFound as expected for command: {}", name);
    }

    drop(dispatcher);
    drop(publisher);
    listener.await?;
    Ok(())
}
