//! lasagna-timer - Cook-time arithmetic for a layered lasagna recipe
//!
//! This crate provides functionality to:
//! - Compute remaining oven time from the minutes already spent baking
//! - Compute preparation time from the number of layers
//! - Combine both into a total elapsed time and a cook status report
//! - Validate inputs through checked variants when callers want errors instead of raw arithmetic

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use app::status::CookStatus;
pub use constants::*;
pub use domain::checked::{
    checked_remaining_cook_time, checked_total_elapsed_time, checked_total_preparation_time,
};
pub use domain::cook_time::{
    CookTimeCalculator, alarm, expected_cook_time, remaining_cook_time, total_elapsed_time,
    total_preparation_time,
};
pub use domain::error::CookTimeError;
