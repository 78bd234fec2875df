// Event module
// Time-ranged calendar event as seen by the week-view layout

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of an event across a session.
pub type EventId = String;

/// Half-open `[start, end)` interval of wall-clock time.
///
/// Base shape for events and for the quantized slots of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Symmetric half-open overlap test.
    ///
    /// Ranges that only touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        (self.start >= other.start && self.start < other.end)
            || (other.start >= self.start && other.start < self.end)
    }

    /// Whether `instant` falls inside `[start, end)`.
    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && self.end >= other.end
    }
}

/// UI-only drag state carried on an event. Ignored by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventOperation {
    Dragging,
    Dragged,
    #[default]
    None,
}

/// Calendar event placed on the week grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub operation: EventOperation,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use calendar_grid::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("standup", "Team Standup", start, end).unwrap();
    /// assert_eq!(event.duration(), chrono::Duration::hours(1));
    /// ```
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            operation: EventOperation::None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Replace the drag state tag
    pub fn with_operation(mut self, operation: EventOperation) -> Self {
        self.operation = operation;
        self
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.trim().is_empty() {
            return Err(EventValidationError::MissingId);
        }

        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if self.end <= self.start {
            return Err(EventValidationError::InvalidTimeRange);
        }

        Ok(())
    }

    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Reasons an event is rejected before it reaches the layout.
#[derive(Debug, Error)]
pub enum EventValidationError {
    #[error("Event id is missing")]
    MissingId,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time must be after start time")]
    InvalidTimeRange,
    #[error("Malformed event payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Wire shape of a dropped event. `id` is optional here so a missing id
/// surfaces as `MissingId` instead of a generic parse failure.
#[derive(Deserialize)]
struct EventPayload {
    #[serde(default)]
    id: Option<EventId>,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    #[serde(default)]
    operation: EventOperation,
}

/// Parse a serialized event (e.g. a drag-and-drop payload).
pub fn parse_event_json(json: &str) -> Result<Event, EventValidationError> {
    let payload: EventPayload = serde_json::from_str(json)?;
    let id = payload.id.ok_or(EventValidationError::MissingId)?;

    let event = Event {
        id,
        title: payload.title,
        start: payload.start,
        end: payload.end,
        operation: payload.operation,
    };
    event.validate()?;
    Ok(event)
}
