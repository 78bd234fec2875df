// Settings module
// Layout configuration: slot granularity and column limit

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SLOT_MINUTES: u32 = 30;
pub const DEFAULT_COLUMN_LIMIT: usize = 3;
pub const MINUTES_PER_DAY: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Length of one time slot in minutes. Must divide a day evenly.
    pub slot_minutes: u32,
    /// Maximum number of columns a cluster may occupy before overflowing.
    pub column_limit: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_SLOT_MINUTES,
            column_limit: DEFAULT_COLUMN_LIMIT,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        validate_slot_minutes(i64::from(self.slot_minutes))?;

        if self.column_limit == 0 {
            return Err(LayoutConfigError::InvalidColumnLimit(self.column_limit));
        }

        Ok(())
    }
}

pub(crate) fn validate_slot_minutes(minutes: i64) -> Result<(), LayoutConfigError> {
    if minutes <= 0 {
        return Err(LayoutConfigError::InvalidSlotDuration(minutes));
    }
    if MINUTES_PER_DAY % minutes != 0 {
        return Err(LayoutConfigError::SlotDurationNotDayDivisor(minutes));
    }
    Ok(())
}

/// Structurally invalid layout configuration. Fatal at setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutConfigError {
    #[error("Slot duration must be positive, got {0} minutes")]
    InvalidSlotDuration(i64),
    #[error("Slot duration of {0} minutes does not divide a 24h day evenly")]
    SlotDurationNotDayDivisor(i64),
    #[error("Column limit must be at least 1, got {0}")]
    InvalidColumnLimit(usize),
}
