//! Backend connectivity
//!
//! - [`Origin`] and [`FallbackStrategy`]: ordered candidate base URLs and the
//!   try-each-once policy
//! - [`ServerLocator`]: availability probing and the connection diagnostic
//! - [`Transport`]: one logical request with origin fallback
//! - [`HealthRecordsApi`]: typed endpoint operations, implemented over HTTP
//!   by [`HttpHealthRecordsApi`]

pub mod api;
pub mod fallback;
pub mod http;
pub mod locator;
pub mod models;
pub mod origin;
pub mod transport;

pub use api::HealthRecordsApi;
pub use fallback::FallbackStrategy;
pub use http::HttpHealthRecordsApi;
pub use locator::{ConnectionReport, ServerLocator};
pub use models::{
    AddFamilyResponse, CampsEnvelope, FamilyMembersEnvelope, HealthReportsEnvelope, LoginReply,
    ProfileEnvelope, RecentReportsEnvelope,
};
pub use origin::Origin;
pub use transport::{RequestOptions, Transport, TransportResponse};
