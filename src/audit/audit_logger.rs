use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::errors::InternalError;
use crate::errors::internal::AuditError;
use crate::types::internal::audit::{AuditEvent, EventType};
use crate::types::internal::auth::{AccountStatus, UserRole};

/// Append-only audit log backed by a plain text file
///
/// Every event becomes one line of the form
/// `[<rfc3339 timestamp>] <event_type> actor=<username> <description>`.
/// The file is created on first write. Writers are serialized by an internal
/// lock so concurrent requests never interleave partial lines.
pub struct AuditLogger {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AuditLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single event to the log file
    pub async fn write_event(&self, event: AuditEvent) -> Result<(), InternalError> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut line = event.to_line(&timestamp);
        line.push('\n');

        let _guard = self.write_lock.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.write_failed(e))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| self.write_failed(e))?;
        file.flush().await.map_err(|e| self.write_failed(e))?;

        tracing::debug!(event_type = %event.event_type, "Audit event written");
        Ok(())
    }

    /// Write an event, logging instead of propagating a failure
    ///
    /// Used on paths where the audited action has already been committed and
    /// the response must reflect that.
    pub async fn record(&self, event: AuditEvent) {
        if let Err(e) = self.write_event(event).await {
            tracing::error!("Failed to write audit event: {}", e);
        }
    }

    fn write_failed(&self, source: std::io::Error) -> InternalError {
        AuditError::LogWriteFailed {
            path: self.path.display().to_string(),
            source,
        }
        .into()
    }

    pub async fn log_login_success(&self, username: &str, role: UserRole) {
        self.record(
            AuditEvent::new(EventType::LoginSuccess, format!("logged in as {}", role))
                .with_actor(username),
        )
        .await;
    }

    pub async fn log_login_failure(&self, username: &str, reason: &str) {
        self.record(AuditEvent::new(EventType::LoginFailure, reason).with_actor(username))
            .await;
    }

    pub async fn log_account_blocked(&self, username: &str) {
        self.record(
            AuditEvent::new(
                EventType::AccountBlocked,
                format!("account '{}' blocked after failed login attempts", username),
            )
            .with_actor(username),
        )
        .await;
    }

    pub async fn log_user_created(&self, actor: &str, username: &str, role: UserRole) {
        self.record(
            AuditEvent::new(
                EventType::UserCreated,
                format!("created user '{}' with role {}", username, role),
            )
            .with_actor(actor),
        )
        .await;
    }

    pub async fn log_user_status_changed(&self, actor: &str, username: &str, status: AccountStatus) {
        self.record(
            AuditEvent::new(
                EventType::UserStatusChanged,
                format!("set status of '{}' to {}", username, status),
            )
            .with_actor(actor),
        )
        .await;
    }

    pub async fn log_user_deleted(&self, actor: &str, username: &str, user_id: i32) {
        self.record(
            AuditEvent::new(
                EventType::UserDeleted,
                format!("deleted user '{}' (id {})", username, user_id),
            )
            .with_actor(actor),
        )
        .await;
    }
}
