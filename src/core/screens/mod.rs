//! Screen controllers
//!
//! Each controller owns the load state of one screen and talks to the
//! backend only through [`crate::adapters::backend::HealthRecordsApi`].
//! Listing screens never surface errors: failures settle into an empty
//! state. Login and add-family return outcome enums carrying alerts.

pub mod home;
pub mod login;
pub mod notifications;
pub mod profile;
pub mod reports;
pub mod state;

pub use home::{HomeController, HomeSnapshot};
pub use login::{
    sanitize_phone_input, strip_phone_separators, FieldErrors, LoginController, LoginForm,
    LoginOutcome,
};
pub use notifications::{NotificationFilter, NotificationsController};
pub use profile::{AddFamilyOutcome, ProfileController, ProfileSnapshot};
pub use reports::{ReportCollections, ReportsController, ReportsSnapshot, ReportsTab};
pub use state::{Carousel, LoadState, StateCell};
