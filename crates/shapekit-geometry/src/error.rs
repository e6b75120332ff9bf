//! Error handling for ShapeKit geometry.
//!
//! All error types use `thiserror` for ergonomic error handling. The handle
//! set is a closed enum matched exhaustively, so there is no "unknown
//! handle" failure at runtime; the only fallible operation in this crate is
//! indexed point-component access.

use thiserror::Error;

/// Geometry error type
///
/// Represents errors produced by the geometry core. Every failure is
/// synchronous and returned directly to the caller; the crate never logs,
/// retries, or suppresses errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Point component index outside the valid range
    #[error("Point index {index} out of range (0-1)")]
    PointIndexOutOfRange {
        /// The index that was requested.
        index: usize,
    },
}

/// Result type using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
