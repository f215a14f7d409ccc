//! Checked cook-time functions
//!
//! Same arithmetic as [`crate::domain::cook_time`], but negative inputs and
//! `i64` overflow are reported as [`CookTimeError`] instead of being computed.
//! A negative remaining time is still a valid result (the lasagna is overdone).

use crate::constants::{EXPECTED_COOK_TIME, PREP_MINUTES_PER_LAYER};
use crate::domain::cook_time::CookTimeCalculator;
use crate::domain::error::CookTimeError;

fn require_layers(layers_to_prep: i64) -> Result<i64, CookTimeError> {
    if layers_to_prep < 0 {
        return Err(CookTimeError::NegativeLayers(layers_to_prep));
    }
    Ok(layers_to_prep)
}

fn require_elapsed(elapsed_minutes: i64) -> Result<i64, CookTimeError> {
    if elapsed_minutes < 0 {
        return Err(CookTimeError::NegativeElapsed(elapsed_minutes));
    }
    Ok(elapsed_minutes)
}

/// Remaining oven time, rejecting negative elapsed minutes
pub fn checked_remaining_cook_time(elapsed_minutes: i64) -> Result<i64, CookTimeError> {
    let elapsed = require_elapsed(elapsed_minutes)?;
    // elapsed >= 0, so this cannot overflow
    Ok(EXPECTED_COOK_TIME - elapsed)
}

/// Preparation time, rejecting negative layer counts and overflow
pub fn checked_total_preparation_time(layers_to_prep: i64) -> Result<i64, CookTimeError> {
    let layers = require_layers(layers_to_prep)?;
    layers
        .checked_mul(PREP_MINUTES_PER_LAYER)
        .ok_or(CookTimeError::Overflow {
            operation: "preparation time",
        })
}

/// Total elapsed time, rejecting negative inputs and overflow
///
/// The layer count is validated before the elapsed minutes.
pub fn checked_total_elapsed_time(
    layers_to_prep: i64,
    elapsed_minutes: i64,
) -> Result<i64, CookTimeError> {
    let preparation = checked_total_preparation_time(layers_to_prep)?;
    let elapsed = require_elapsed(elapsed_minutes)?;
    preparation
        .checked_add(elapsed)
        .ok_or(CookTimeError::Overflow {
            operation: "total elapsed time",
        })
}

impl CookTimeCalculator {
    pub fn checked_remaining_cook_time(&self, elapsed_minutes: i64) -> Result<i64, CookTimeError> {
        checked_remaining_cook_time(elapsed_minutes)
    }

    pub fn checked_total_preparation_time(
        &self,
        layers_to_prep: i64,
    ) -> Result<i64, CookTimeError> {
        checked_total_preparation_time(layers_to_prep)
    }

    pub fn checked_total_elapsed_time(
        &self,
        layers_to_prep: i64,
        elapsed_minutes: i64,
    ) -> Result<i64, CookTimeError> {
        checked_total_elapsed_time(layers_to_prep, elapsed_minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_remaining_ok() {
        assert_eq!(checked_remaining_cook_time(0), Ok(40));
        assert_eq!(checked_remaining_cook_time(41), Ok(-1));
        assert_eq!(checked_remaining_cook_time(i64::MAX), Ok(40 - i64::MAX));
    }

    #[test]
    fn test_checked_remaining_negative() {
        assert_eq!(
            checked_remaining_cook_time(-1),
            Err(CookTimeError::NegativeElapsed(-1))
        );
    }

    #[test]
    fn test_checked_preparation_ok() {
        assert_eq!(checked_total_preparation_time(9), Ok(18));
        assert_eq!(checked_total_preparation_time(0), Ok(0));
    }

    #[test]
    fn test_checked_preparation_negative() {
        assert_eq!(
            checked_total_preparation_time(-2),
            Err(CookTimeError::NegativeLayers(-2))
        );
    }

    #[test]
    fn test_checked_preparation_overflow() {
        assert!(matches!(
            checked_total_preparation_time(i64::MAX),
            Err(CookTimeError::Overflow { .. })
        ));
    }

    #[test]
    fn test_checked_elapsed_ok() {
        assert_eq!(checked_total_elapsed_time(3, 20), Ok(26));
    }

    #[test]
    fn test_checked_elapsed_layers_checked_first() {
        assert_eq!(
            checked_total_elapsed_time(-1, -1),
            Err(CookTimeError::NegativeLayers(-1))
        );
        assert_eq!(
            checked_total_elapsed_time(1, -1),
            Err(CookTimeError::NegativeElapsed(-1))
        );
    }

    #[test]
    fn test_checked_elapsed_overflow() {
        let result = checked_total_elapsed_time(i64::MAX / 2, i64::MAX);
        assert_eq!(
            result,
            Err(CookTimeError::Overflow {
                operation: "total elapsed time"
            })
        );
    }
}
