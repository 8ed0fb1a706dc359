//! Local storage for the session identity
//!
//! - [`KeyValueStore`] - the storage abstraction
//! - [`FileKeyValueStore`] - a JSON file on disk
//! - [`MemoryKeyValueStore`] - process memory
//! - [`SessionStore`] - typed session access with errors swallowed

pub mod file;
pub mod memory;
pub mod session;
pub mod traits;

pub use file::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use session::{SessionStore, PHONE_NUMBER_KEY, USER_ID_KEY};
pub use traits::KeyValueStore;
