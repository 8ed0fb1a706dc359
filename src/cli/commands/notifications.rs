//! Notifications command implementation
//!
//! Notifications have no backend source; the list starts empty and can be
//! seeded from a JSON file for demonstration.

use super::render;
use crate::core::screens::{NotificationFilter, NotificationsController};
use crate::domain::Notification;
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Unread,
    Important,
}

impl From<FilterArg> for NotificationFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => NotificationFilter::All,
            FilterArg::Unread => NotificationFilter::Unread,
            FilterArg::Important => NotificationFilter::Important,
        }
    }
}

/// Arguments for the notifications command
#[derive(Args, Debug)]
pub struct NotificationsArgs {
    /// Which notifications to list
    #[arg(long, value_enum, default_value_t = FilterArg::All)]
    pub filter: FilterArg,

    /// JSON file with an array of notifications to start from
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Mark one notification as read before listing
    #[arg(long, value_name = "ID")]
    pub mark_read: Option<String>,

    /// Mark every notification as read before listing
    #[arg(long)]
    pub mark_all_read: bool,

    /// Delete one notification before listing
    #[arg(long, value_name = "ID")]
    pub delete: Option<String>,
}

impl NotificationsArgs {
    /// Execute the notifications command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let mut controller = NotificationsController::new(self.load_seed()?);

        if let Some(id) = &self.mark_read {
            if !controller.mark_as_read(id) {
                println!("⚠️  No notification with id {id}");
            }
        }
        if self.mark_all_read {
            controller.mark_all_read();
        }
        if let Some(id) = &self.delete {
            if !controller.delete(id) {
                println!("⚠️  No notification with id {id}");
            }
        }

        controller.set_filter(self.filter.into());
        print_list(&controller);
        Ok(0)
    }

    fn load_seed(&self) -> anyhow::Result<Vec<Notification>> {
        let Some(path) = &self.seed else {
            return Ok(Vec::new());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse notifications in {}", path.display()))
    }
}

fn print_list(controller: &NotificationsController) {
    println!("🔔 Notifications ({} unread)", controller.unread_count());
    let visible = controller.visible();
    if visible.is_empty() {
        println!("  No notifications");
    }
    for notification in visible {
        render::print_notification(notification);
    }
}
