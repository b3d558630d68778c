use bon::Builder;

/// 命令响应（Command Response）
///
/// 处理器执行命令后的结果，可选地携带按发生顺序排列的领域事件。
/// `events` 返回 `None` 或空切片时均表示“没有事件”。
pub trait CommandResponse: Send + 'static {
    type Event: Send + Sync;

    fn events(&self) -> Option<&[Self::Event]>;
}

/// 通用的命令确认响应
///
/// ```rust
/// use dispatcher_application::CommandAck;
///
/// let ack = CommandAck::builder().events(vec!["user.registered"]).build();
/// assert!(ack.is_ok());
/// assert_eq!(ack.events(), Some(&["user.registered"][..]));
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct CommandAck<E> {
    /// 命令是否被受理
    #[builder(default = true)]
    ok: bool,
    /// 未受理时的原因
    #[builder(into)]
    reason: Option<String>,
    /// 执行过程中产生的领域事件
    events: Option<Vec<E>>,
}

impl<E> CommandAck<E> {
    /// 受理且无事件
    pub fn ok() -> Self {
        Self {
            ok: true,
            reason: None,
            events: None,
        }
    }

    /// 受理并携带事件
    pub fn ok_with_events(events: Vec<E>) -> Self {
        Self {
            ok: true,
            reason: None,
            events: Some(events),
        }
    }

    /// 未受理
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
            events: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn events(&self) -> Option<&[E]> {
        self.events.as_deref()
    }

    pub fn into_events(self) -> Vec<E> {
        self.events.unwrap_or_default()
    }
}

impl<E> CommandResponse for CommandAck<E>
where
    E: Send + Sync + 'static,
{
    type Event = E;

    fn events(&self) -> Option<&[E]> {
        CommandAck::events(self)
    }
}
