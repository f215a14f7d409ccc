//! Cook status report
//!
//! Snapshot of where a lasagna is in its preparation and baking, built from
//! the domain functions.

use std::fmt;

use crate::domain::checked::{
    checked_remaining_cook_time, checked_total_elapsed_time, checked_total_preparation_time,
};
use crate::domain::cook_time::{
    alarm, remaining_cook_time, total_elapsed_time, total_preparation_time,
};
use crate::domain::error::CookTimeError;

/// Cook progress for a given layer count and baking time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookStatus {
    pub layers_to_prep: i64,
    pub elapsed_minutes: i64,
    pub preparation_minutes: i64,
    pub remaining_minutes: i64,
    pub total_elapsed_minutes: i64,
}

impl CookStatus {
    /// Build a status without validating the inputs
    pub fn new(layers_to_prep: i64, elapsed_minutes: i64) -> Self {
        Self {
            layers_to_prep,
            elapsed_minutes,
            preparation_minutes: total_preparation_time(layers_to_prep),
            remaining_minutes: remaining_cook_time(elapsed_minutes),
            total_elapsed_minutes: total_elapsed_time(layers_to_prep, elapsed_minutes),
        }
    }

    /// Build a status, rejecting negative inputs and overflow
    ///
    /// # Errors
    ///
    /// Returns the first [`CookTimeError`] hit, checking layers before elapsed minutes.
    pub fn checked(layers_to_prep: i64, elapsed_minutes: i64) -> Result<Self, CookTimeError> {
        let preparation_minutes = checked_total_preparation_time(layers_to_prep)?;
        let remaining_minutes = checked_remaining_cook_time(elapsed_minutes)?;
        let total_elapsed_minutes = checked_total_elapsed_time(layers_to_prep, elapsed_minutes)?;

        Ok(Self {
            layers_to_prep,
            elapsed_minutes,
            preparation_minutes,
            remaining_minutes,
            total_elapsed_minutes,
        })
    }

    /// True once the expected baking time has been reached
    pub fn is_done(&self) -> bool {
        self.remaining_minutes <= 0
    }

    pub fn alarm(&self) -> Option<&'static str> {
        self.is_done().then(alarm)
    }
}

impl fmt::Display for CookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Layers: {} ({} minutes of preparation)",
            self.layers_to_prep, self.preparation_minutes
        )?;
        writeln!(f, "Baked: {} minutes", self.elapsed_minutes)?;
        if self.is_done() {
            writeln!(
                f,
                "Remaining: done ({} minutes over)",
                self.remaining_minutes.unsigned_abs()
            )?;
        } else {
            writeln!(f, "Remaining: {} minutes", self.remaining_minutes)?;
        }
        write!(f, "Total elapsed: {} minutes", self.total_elapsed_minutes)
    }
}
