//! Day reducer: the entry point turning a day's events into rendered slots.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::layout::DaySlot;
use crate::utils::date::{end_of_day_exclusive, start_of_day};

use super::clustering::cluster_events;
use super::column_grid::ColumnGridBuilder;
use super::projector::GridCache;

/// Events lying entirely inside `date`.
///
/// An event must start at or after midnight and end strictly before the next
/// midnight; events crossing either boundary are left out. The last
/// representable day has no next midnight, so only its start bounds it.
pub fn events_for_day(date: NaiveDate, events: &[Event]) -> Vec<&Event> {
    let day_start = start_of_day(date);
    let day_end = end_of_day_exclusive(date);
    events
        .iter()
        .filter(|event| event.start >= day_start && !matches!(day_end, Some(end) if event.end >= end))
        .collect()
}

/// Quantize the day, cluster its events once and project every slot.
///
/// The result is a fresh snapshot; recompute it whenever the events or the
/// date change.
pub fn reduce_events_to_day_slots<'a>(
    date: NaiveDate,
    events: &'a [Event],
    builder: &ColumnGridBuilder,
) -> Vec<DaySlot<'a>> {
    let day_events = events_for_day(date, events);
    let nodes = cluster_events(day_events.iter().copied());
    let cache = GridCache::new(&nodes, builder);

    let slots: Vec<DaySlot<'a>> = builder
        .time_grid()
        .day_slots(date)
        .into_iter()
        .map(|range| {
            let projection = cache.project(&range);
            DaySlot {
                range,
                columns: projection.columns,
                overflow: projection.overflow,
            }
        })
        .collect();

    log::debug!(
        "Laid out {}: {} of {} event(s) in {} cluster(s), {} populated slot(s)",
        date,
        day_events.len(),
        events.len(),
        nodes.len(),
        slots.iter().filter(|slot| !slot.columns.is_empty()).count()
    );

    slots
}
