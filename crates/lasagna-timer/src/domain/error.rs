//! Cook-time validation errors

use thiserror::Error;

/// Errors reported by the checked cook-time functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CookTimeError {
    /// Layer count below zero
    #[error("Invalid layer count: {0} (must be 0 or greater)")]
    NegativeLayers(i64),
    /// Elapsed baking time below zero
    #[error("Invalid elapsed time: {0} minutes (must be 0 or greater)")]
    NegativeElapsed(i64),
    /// Result does not fit in i64
    #[error("Arithmetic overflow while computing {operation}")]
    Overflow { operation: &'static str },
}
