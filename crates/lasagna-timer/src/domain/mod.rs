//! Domain layer - Pure computational logic
//!
//! This module contains the cook-time arithmetic without I/O dependencies.

pub mod checked;
pub mod cook_time;
pub mod error;
