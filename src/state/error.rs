//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Network worker is not running
    #[error("Network worker is unavailable")]
    NetworkUnavailable,
}
