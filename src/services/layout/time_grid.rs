//! Time-grid quantizer: splits a day into fixed slots and snaps instants to
//! slot boundaries.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::event::{Event, TimeRange};
use crate::models::settings::{
    validate_slot_minutes, LayoutConfigError, DEFAULT_SLOT_MINUTES, MINUTES_PER_DAY,
};
use crate::utils::date::start_of_day;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingDirection {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeGrid {
    slot: Duration,
}

impl TimeGrid {
    pub fn new(slot_minutes: i64) -> Result<Self, LayoutConfigError> {
        validate_slot_minutes(slot_minutes)?;
        Ok(Self {
            slot: Duration::minutes(slot_minutes),
        })
    }

    pub fn slot_duration(&self) -> Duration {
        self.slot
    }

    pub fn slot_count(&self) -> usize {
        (MINUTES_PER_DAY / self.slot.num_minutes()) as usize
    }

    /// Consecutive slots covering `[midnight, next midnight)` of `date`.
    ///
    /// On `NaiveDate::MAX` the final slot ends past chrono's range and is
    /// omitted.
    pub fn day_slots(&self, date: NaiveDate) -> Vec<TimeRange> {
        let mut slots = Vec::with_capacity(self.slot_count());
        let mut start = start_of_day(date);
        for _ in 0..self.slot_count() {
            let Some(end) = start.checked_add_signed(self.slot) else {
                log::warn!("Slot starting {} ends outside the supported date range", start);
                break;
            };
            slots.push(TimeRange::new(start, end));
            start = end;
        }
        slots
    }

    /// Round `instant` to a slot boundary. Exact boundaries are returned as-is
    /// in both directions. Boundaries outside chrono's range saturate to
    /// `NaiveDateTime::MIN`/`MAX`.
    pub fn snap(&self, instant: NaiveDateTime, direction: RoundingDirection) -> NaiveDateTime {
        let remainder = self.offset_into_slot(instant);
        if remainder.is_zero() {
            return instant;
        }

        match direction {
            RoundingDirection::Down => instant
                .checked_sub_signed(remainder)
                .unwrap_or(NaiveDateTime::MIN),
            RoundingDirection::Up => instant
                .checked_add_signed(self.slot - remainder)
                .unwrap_or(NaiveDateTime::MAX),
        }
    }

    /// Widen a range outward to slot boundaries: start down, end up.
    pub fn snap_range(&self, range: TimeRange) -> TimeRange {
        TimeRange::new(
            self.snap(range.start, RoundingDirection::Down),
            self.snap(range.end, RoundingDirection::Up),
        )
    }

    /// Whole slots covered by the event's duration, used for tile height.
    pub fn required_slots(&self, event: &Event) -> i64 {
        event.duration().num_seconds() / self.slot.num_seconds()
    }

    fn offset_into_slot(&self, instant: NaiveDateTime) -> Duration {
        let stamp = instant.and_utc();
        let seconds = stamp.timestamp().rem_euclid(self.slot.num_seconds());
        Duration::seconds(seconds) + Duration::nanoseconds(i64::from(stamp.timestamp_subsec_nanos()))
    }
}

impl Default for TimeGrid {
    fn default() -> Self {
        Self {
            slot: Duration::minutes(i64::from(DEFAULT_SLOT_MINUTES)),
        }
    }
}

/// Events whose start lies in `[slot.start, slot.end)`.
pub fn events_starting_in_slot<'a, I>(slot: &TimeRange, events: I) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| slot.contains_instant(event.start))
        .collect()
}
