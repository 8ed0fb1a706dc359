//! Domain models and types for Chhanv.
//!
//! This module contains the entities exchanged with the health-records
//! backend and the identity data persisted locally.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Identifiers** ([`UserId`], [`PhoneNumber`])
//! - **Entities** ([`Camp`], [`HealthReport`], [`FamilyMember`], [`UserData`], [`Notification`])
//! - **Session identity** ([`Session`])
//! - **Error types** ([`ChhanvError`], [`TransportError`])
//! - **Result type alias** ([`Result`])
//!
//! Entities are immutable snapshots: a screen replaces its whole collection
//! after every fetch and never edits individual records.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ChhanvError>`]:
//!
//! ```rust
//! use chhanv::domain::{ChhanvError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = chhanv::config::ChhanvConfig::from_file("chhanv.toml")?;
//!     Ok(())
//! }
//! ```

pub mod alert;
pub mod camp;
pub mod errors;
pub mod family;
pub mod ids;
pub mod lenient;
pub mod notification;
pub mod profile;
pub mod report;
pub mod result;
pub mod secret;
pub mod session;

// Re-export commonly used types for convenience
pub use alert::Alert;
pub use camp::Camp;
pub use errors::{ChhanvError, TransportError};
pub use family::{health_id, AddFamilyRequest, FamilyMember, FamilyMemberRaw, NewFamilyMember};
pub use ids::{PhoneNumber, UserId};
pub use notification::{Notification, NotificationKind, Priority};
pub use profile::{UserData, UserDataRaw};
pub use report::{HealthReport, ReportCategory, Test, TestSeverity};
pub use result::Result;
pub use secret::{secret_string, SecretString, SecretValue};
pub use session::Session;
