//! Result type alias for Chhanv
//!
//! This module provides a convenient Result type alias that uses ChhanvError
//! as the error type.

use super::errors::ChhanvError;

/// Result type alias for Chhanv operations
///
/// # Examples
///
/// ```
/// use chhanv::domain::result::Result;
/// use chhanv::domain::errors::ChhanvError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ChhanvError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChhanvError>;
