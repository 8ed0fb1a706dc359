//! App shell: ties login and logout to navigation and the session

use super::navigation::{Navigator, Screen};
use super::screens::LoginOutcome;
use crate::adapters::storage::SessionStore;

pub struct AppShell {
    navigator: Navigator,
    session: SessionStore,
}

impl AppShell {
    pub fn new(session: SessionStore) -> Self {
        Self {
            navigator: Navigator::new(),
            session,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn current(&self) -> &Screen {
        self.navigator.current()
    }

    pub fn finish_splash(&mut self) {
        self.navigator.finish_splash();
    }

    /// Move to Home after a successful login; other outcomes stay put
    pub fn on_login(&mut self, outcome: &LoginOutcome) -> bool {
        match outcome {
            LoginOutcome::Success { user_name, .. } => {
                self.navigator.replace(Screen::Home {
                    user_name: user_name.clone(),
                });
                true
            }
            _ => false,
        }
    }

    /// Clear the stored identity and return to Login
    ///
    /// Nothing from the logged-in stack stays reachable through `go_back`.
    pub async fn logout(&mut self) {
        self.session.clear_session().await;
        self.navigator.reset(Screen::Login);
    }
}
