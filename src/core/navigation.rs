//! Stack navigation between screens
//!
//! The app always has at least one screen; `go_back` never pops the root.

use crate::domain::HealthReport;
use std::fmt;

/// A screen together with its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Splash,
    Login,
    Home { user_name: String },
    Reports,
    ReportDetails { report: Box<HealthReport> },
    Profile,
    Notifications,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Splash => "Splash",
            Screen::Login => "Login",
            Screen::Home { .. } => "Home",
            Screen::Reports => "Reports",
            Screen::ReportDetails { .. } => "ReportDetails",
            Screen::Profile => "Profile",
            Screen::Notifications => "Notifications",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Starts on the splash screen
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Splash],
        }
    }

    pub fn current(&self) -> &Screen {
        // never empty: construction pushes a root and go_back keeps it
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, screen: Screen) {
        tracing::debug!(from = %self.current(), to = %screen, "Navigate");
        self.stack.push(screen);
    }

    /// Swap the current screen for `screen`
    pub fn replace(&mut self, screen: Screen) {
        tracing::debug!(from = %self.current(), to = %screen, "Replace screen");
        let last = self.stack.len() - 1;
        self.stack[last] = screen;
    }

    /// Drop the whole stack and start over at `screen`
    pub fn reset(&mut self, screen: Screen) {
        tracing::debug!(
            from = %self.current(),
            to = %screen,
            depth = self.stack.len(),
            "Reset stack"
        );
        self.stack.clear();
        self.stack.push(screen);
    }

    /// Pop the current screen; false when already at the root
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    /// Leave the splash screen for login
    pub fn finish_splash(&mut self) {
        if matches!(self.current(), Screen::Splash) {
            self.replace(Screen::Login);
        }
    }
}
