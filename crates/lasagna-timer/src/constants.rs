//! Recipe constants

// =============================================================================
// Timing
// =============================================================================

/// Minutes the lasagna is expected to spend in the oven
pub const EXPECTED_COOK_TIME: i64 = 40;

/// Minutes of preparation needed for each layer
pub const PREP_MINUTES_PER_LAYER: i64 = 2;

// =============================================================================
// Alarm
// =============================================================================

/// Message sounded when the lasagna is done
pub const ALARM_MESSAGE: &str = "Ding!";
