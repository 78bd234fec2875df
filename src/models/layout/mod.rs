//! Layout output types for the week-view time grid.
//!
//! Everything here borrows events from the caller's list: a layout is a
//! snapshot that lives for one computation and never owns or mutates events.

use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::models::event::{Event, TimeRange};

/// Maximal set of transitively overlapping events, laid out as one unit.
///
/// `start`/`end` are the min/max bounds over `events`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterNode<'a> {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub events: Vec<&'a Event>,
}

impl<'a> ClusterNode<'a> {
    /// Start a node seeded with a single event
    pub fn new(event: &'a Event) -> Self {
        Self {
            start: event.start,
            end: event.end,
            events: vec![event],
        }
    }

    pub fn span(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// An event pinned to a column of its cluster's grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridCell<'a> {
    pub event: &'a Event,
    pub column: usize,
}

/// Column assignment for a single cluster.
///
/// `width` is `max(column) + 1` over `cells` and never exceeds the configured
/// column limit. Events that would have exceeded it are kept in `overflow`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ColumnGrid<'a> {
    pub width: usize,
    pub cells: Vec<GridCell<'a>>,
    pub overflow: Vec<&'a Event>,
}

impl ColumnGrid<'_> {
    pub fn column_of(&self, event_id: &str) -> Option<usize> {
        self.cells
            .iter()
            .find(|cell| cell.event.id == event_id)
            .map(|cell| cell.column)
    }

    pub fn is_overflowed(&self, event_id: &str) -> bool {
        self.overflow.iter().any(|event| event.id == event_id)
    }
}

/// One column of a rendered slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlotColumn<'a> {
    /// The event starting in this slot that owns the column. `id` is the event id.
    Occupied { id: String, event: &'a Event },
    /// Keeps column alignment when the column has no event starting here.
    Placeholder { id: String },
}

impl<'a> SlotColumn<'a> {
    pub fn occupied(event: &'a Event) -> Self {
        Self::Occupied {
            id: event.id.clone(),
            event,
        }
    }

    /// Placeholder with a fresh id so renderers never reuse a stale key.
    pub fn placeholder() -> Self {
        Self::Placeholder {
            id: Uuid::new_v4().to_string(),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Occupied { id, .. } | Self::Placeholder { id } => id.as_str(),
        }
    }

    pub fn event(&self) -> Option<&'a Event> {
        match self {
            Self::Occupied { event, .. } => Some(*event),
            Self::Placeholder { .. } => None,
        }
    }

    pub fn is_in_scope_of_slot(&self) -> bool {
        matches!(self, Self::Occupied { .. })
    }
}

/// A quantized slot of a day together with its rendered columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySlot<'a> {
    #[serde(flatten)]
    pub range: TimeRange,
    pub columns: Vec<SlotColumn<'a>>,
    /// Events starting in this slot that did not get a column.
    pub overflow: Vec<&'a Event>,
}

impl<'a> DaySlot<'a> {
    pub fn start(&self) -> NaiveDateTime {
        self.range.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.range.end
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    /// Column contents by event id, `None` for placeholders.
    ///
    /// Placeholder ids are random, so this is the shape to compare when
    /// checking two layouts for structural equality.
    pub fn column_event_ids(&self) -> Vec<Option<&'a str>> {
        self.columns
            .iter()
            .map(|column| column.event().map(|event| event.id.as_str()))
            .collect()
    }
}
