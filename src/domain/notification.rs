//! In-app notifications

use serde::{Deserialize, Serialize};

/// What a notification is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Health,
    Camp,
    Reminder,
    Report,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A single notification entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub date: String,
    pub is_read: bool,
    pub priority: Priority,
    #[serde(default)]
    pub action_required: bool,
}

impl Notification {
    /// High priority, or flagged as needing action
    pub fn is_important(&self) -> bool {
        self.priority == Priority::High || self.action_required
    }
}
