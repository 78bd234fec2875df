// Layout service
// Week-view column layout: quantize, cluster, assign columns, project slots

pub mod clustering;
pub mod column_grid;
pub mod day;
pub mod projector;
pub mod time_grid;

use chrono::NaiveDate;

use crate::models::event::{Event, TimeRange};
use crate::models::layout::{ClusterNode, ColumnGrid, DaySlot, SlotColumn};
use crate::models::settings::{LayoutConfigError, LayoutSettings, DEFAULT_COLUMN_LIMIT};
use crate::services::event::EventSource;
use crate::utils::date::week_days;

pub use clustering::cluster_events;
pub use column_grid::ColumnGridBuilder;
pub use day::{events_for_day, reduce_events_to_day_slots};
pub use projector::{project_slot, GridCache, SlotProjection};
pub use time_grid::{events_starting_in_slot, RoundingDirection, TimeGrid};

/// Validated layout configuration with every stage of the pipeline exposed.
///
/// Construction is the only fallible step; layout calls never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutEngine {
    builder: ColumnGridBuilder,
}

impl LayoutEngine {
    pub fn new(settings: &LayoutSettings) -> Result<Self, LayoutConfigError> {
        settings.validate()?;
        let grid = TimeGrid::new(i64::from(settings.slot_minutes))?;
        Ok(Self {
            builder: ColumnGridBuilder::new(grid, settings.column_limit),
        })
    }

    pub fn time_grid(&self) -> &TimeGrid {
        self.builder.time_grid()
    }

    pub fn column_limit(&self) -> usize {
        self.builder.column_limit()
    }

    /// Slots of `date` with their columns.
    pub fn day_slots<'a>(&self, date: NaiveDate, events: &'a [Event]) -> Vec<DaySlot<'a>> {
        reduce_events_to_day_slots(date, events, &self.builder)
    }

    /// Same as [`day_slots`](Self::day_slots), reading from an injected source.
    pub fn layout_source<'a, S>(&self, date: NaiveDate, source: &'a S) -> Vec<DaySlot<'a>>
    where
        S: EventSource + ?Sized,
    {
        self.day_slots(date, source.events())
    }

    /// Independent per-day layouts for the Sunday-started week containing `date`.
    pub fn week_slots<'a>(&self, date: NaiveDate, events: &'a [Event]) -> Vec<(NaiveDate, Vec<DaySlot<'a>>)> {
        week_days(date)
            .into_iter()
            .map(|day| (day, self.day_slots(day, events)))
            .collect()
    }

    pub fn clusters<'a>(&self, events: &[&'a Event]) -> Vec<ClusterNode<'a>> {
        cluster_events(events.iter().copied())
    }

    pub fn column_grid<'a>(&self, node: &ClusterNode<'a>) -> ColumnGrid<'a> {
        self.builder.build(node)
    }

    pub fn project<'a>(&self, slot: &TimeRange, nodes: &[ClusterNode<'a>]) -> Vec<SlotColumn<'a>> {
        project_slot(slot, nodes, &self.builder)
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            builder: ColumnGridBuilder::new(TimeGrid::default(), DEFAULT_COLUMN_LIMIT),
        }
    }
}
