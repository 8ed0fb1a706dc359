//! Notifications screen controller
//!
//! There is no backend endpoint for notifications; the list lives in memory
//! and starts empty unless seeded.

use crate::domain::Notification;

/// Which notifications are listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    /// High priority or flagged as needing action
    Important,
}

impl NotificationFilter {
    pub fn matches(self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.is_read,
            NotificationFilter::Important => notification.is_important(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationsController {
    notifications: Vec<Notification>,
    filter: NotificationFilter,
}

impl NotificationsController {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self {
            notifications,
            filter: NotificationFilter::All,
        }
    }

    pub fn set_filter(&mut self, filter: NotificationFilter) {
        self.filter = filter;
    }

    pub fn filter(&self) -> NotificationFilter {
        self.filter
    }

    /// Notifications passing the current filter, in list order
    pub fn visible(&self) -> Vec<&Notification> {
        self.notifications
            .iter()
            .filter(|n| self.filter.matches(n))
            .collect()
    }

    pub fn all(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    /// Returns false if no notification has this id
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        match self.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.is_read = true;
        }
    }

    /// Returns false if no notification has this id
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NotificationKind, Priority};

    fn notification(
        id: &str,
        is_read: bool,
        priority: Priority,
        action_required: bool,
    ) -> Notification {
        Notification {
            id: id.to_string(),
            kind: NotificationKind::Camp,
            title: "Camp".to_string(),
            message: "Eye camp on Friday".to_string(),
            time: "10:00".to_string(),
            date: "2025-10-20".to_string(),
            is_read,
            priority,
            action_required,
        }
    }

    fn controller() -> NotificationsController {
        NotificationsController::new(vec![
            notification("a", false, Priority::High, false),
            notification("b", true, Priority::Low, true),
            notification("c", false, Priority::Medium, false),
        ])
    }

    fn ids(controller: &NotificationsController) -> Vec<&str> {
        controller.visible().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_filters() {
        let mut controller = controller();
        assert_eq!(ids(&controller), vec!["a", "b", "c"]);

        controller.set_filter(NotificationFilter::Unread);
        assert_eq!(ids(&controller), vec!["a", "c"]);

        controller.set_filter(NotificationFilter::Important);
        assert_eq!(ids(&controller), vec!["a", "b"]);
    }

    #[test]
    fn test_mark_as_read() {
        let mut controller = controller();
        assert_eq!(controller.unread_count(), 2);
        assert!(controller.mark_as_read("a"));
        assert!(!controller.mark_as_read("missing"));
        assert_eq!(controller.unread_count(), 1);

        controller.mark_all_read();
        assert_eq!(controller.unread_count(), 0);
    }

    #[test]
    fn test_delete() {
        let mut controller = controller();
        assert!(controller.delete("b"));
        assert!(!controller.delete("b"));
        assert_eq!(controller.all().len(), 2);
    }

    #[test]
    fn test_empty_by_default() {
        let controller = NotificationsController::default();
        assert!(controller.visible().is_empty());
        assert_eq!(controller.unread_count(), 0);
    }
}
