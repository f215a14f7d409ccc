//! Application layer - Use case implementations
//!
//! This module combines the domain functions into reports for callers.

pub mod status;
