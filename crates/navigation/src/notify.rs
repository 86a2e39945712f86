//! Fire-and-forget notification side channel for refused pushes.

use crossbeam_channel::{Sender, TrySendError};
use serde::Serialize;
use shared::BladeType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationKind {
    MaxDepth,
    SingletonExists,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub blade_type: Option<BladeType>,
    pub stack_len: usize,
}

impl Notification {
    pub fn max_depth(stack_len: usize) -> Self {
        Self {
            kind: NotificationKind::MaxDepth,
            blade_type: None,
            stack_len,
        }
    }

    pub fn singleton_exists(blade_type: BladeType, stack_len: usize) -> Self {
        Self {
            kind: NotificationKind::SingletonExists,
            blade_type: Some(blade_type),
            stack_len,
        }
    }

    pub fn message(&self) -> String {
        match (self.kind, self.blade_type) {
            (NotificationKind::MaxDepth, _) => {
                "Maximum blade depth reached. Close some blades first.".to_string()
            }
            (NotificationKind::SingletonExists, Some(blade_type)) => {
                format!("'{blade_type}' is already open.")
            }
            (NotificationKind::SingletonExists, None) => "This view is already open.".to_string(),
        }
    }
}

/// Receives notifications from the controller.
///
/// The signature is infallible and implementations must return promptly: the
/// controller calls `notify` inline and does not wait on anything it starts.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Drops every notification.
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: &Notification) {}
}

/// Writes notifications to the log.
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &Notification) {
        tracing::info!(
            kind = ?notification.kind,
            blade_type = notification.blade_type.map(BladeType::as_str),
            stack_len = notification.stack_len,
            "{}",
            notification.message()
        );
    }
}

/// Forwards notifications to a UI thread over a bounded channel without blocking.
pub struct ChannelSink {
    tx: Sender<Notification>,
}

impl ChannelSink {
    pub fn new(tx: Sender<Notification>) -> Self {
        Self { tx }
    }
}

impl NotificationSink for ChannelSink {
    fn notify(&self, notification: &Notification) {
        match self.tx.try_send(notification.clone()) {
            Ok(()) => tracing::debug!(kind = ?notification.kind, "queued navigation notification"),
            Err(TrySendError::Full(_)) => {
                tracing::warn!(kind = ?notification.kind, "notification queue is full; dropping")
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::warn!(kind = ?notification.kind, "notification receiver disconnected; dropping")
            }
        }
    }
}
