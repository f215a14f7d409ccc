//! Cook-time arithmetic
//!
//! Free functions for the recipe timings, plus a stateless [`CookTimeCalculator`]
//! exposing the same operations as methods.
//!
//! Inputs are never validated here: negative layer counts or elapsed minutes are
//! computed as-is. Arithmetic wraps on `i64` overflow so every function is total;
//! see [`crate::domain::checked`] for variants that report bad input instead.

use crate::constants::{ALARM_MESSAGE, EXPECTED_COOK_TIME, PREP_MINUTES_PER_LAYER};

/// Minutes the lasagna should bake (always 40)
#[inline]
pub fn expected_cook_time() -> i64 {
    EXPECTED_COOK_TIME
}

/// Minutes left in the oven after `elapsed_minutes` of baking
///
/// Not clamped: baking past the expected time gives a negative result.
#[inline]
pub fn remaining_cook_time(elapsed_minutes: i64) -> i64 {
    EXPECTED_COOK_TIME.wrapping_sub(elapsed_minutes)
}

/// Minutes needed to prepare `layers_to_prep` layers (2 per layer)
#[inline]
pub fn total_preparation_time(layers_to_prep: i64) -> i64 {
    layers_to_prep.wrapping_mul(PREP_MINUTES_PER_LAYER)
}

/// Preparation time plus the minutes already spent baking
#[inline]
pub fn total_elapsed_time(layers_to_prep: i64, elapsed_minutes: i64) -> i64 {
    total_preparation_time(layers_to_prep).wrapping_add(elapsed_minutes)
}

/// Alarm message for a finished lasagna
#[inline]
pub fn alarm() -> &'static str {
    ALARM_MESSAGE
}

/// Stateless calculator bundling the cook-time operations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CookTimeCalculator;

impl CookTimeCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn expected_cook_time(&self) -> i64 {
        expected_cook_time()
    }

    pub fn remaining_cook_time(&self, elapsed_minutes: i64) -> i64 {
        remaining_cook_time(elapsed_minutes)
    }

    pub fn total_preparation_time(&self, layers_to_prep: i64) -> i64 {
        total_preparation_time(layers_to_prep)
    }

    pub fn total_elapsed_time(&self, layers_to_prep: i64, elapsed_minutes: i64) -> i64 {
        total_elapsed_time(layers_to_prep, elapsed_minutes)
    }

    pub fn alarm(&self) -> &'static str {
        alarm()
    }
}
