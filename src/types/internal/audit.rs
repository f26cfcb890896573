use std::fmt;

/// Event types written to the audit log
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    LoginSuccess,
    LoginFailure,
    AccountBlocked,
    UserCreated,
    UserStatusChanged,
    UserDeleted,
}

impl EventType {
    /// Convert EventType to its string representation in the log file
    pub fn as_str(&self) -> &str {
        match self {
            Self::LoginSuccess => "login_success",
            Self::LoginFailure => "login_failure",
            Self::AccountBlocked => "account_blocked",
            Self::UserCreated => "user_created",
            Self::UserStatusChanged => "user_status_changed",
            Self::UserDeleted => "user_deleted",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single audit log entry
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub event_type: EventType,
    /// Username of whoever performed the action, if known
    pub actor: Option<String>,
    pub description: String,
}

impl AuditEvent {
    /// Create a new audit event with the specified event type and description
    pub fn new(event_type: EventType, description: impl Into<String>) -> Self {
        Self {
            event_type,
            actor: None,
            description: description.into(),
        }
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    /// Render the event as one log line, without the trailing newline
    ///
    /// Newlines inside the description are flattened so each event stays on
    /// exactly one line of the file. The actor is written bare only when it
    /// is a single token; anything else is quoted with control characters
    /// escaped.
    pub fn to_line(&self, timestamp: &str) -> String {
        let description = self.description.replace(['\r', '\n'], " ");
        format!(
            "[{}] {} actor={} {}",
            timestamp,
            self.event_type,
            render_actor(self.actor.as_deref().unwrap_or("system")),
            description
        )
    }
}

fn render_actor(actor: &str) -> String {
    let bare = !actor.is_empty()
        && actor
            .chars()
            .all(|c| !c.is_whitespace() && !c.is_control() && c != '"' && c != '\\');
    if bare {
        actor.to_string()
    } else {
        format!("{:?}", actor)
    }
}
