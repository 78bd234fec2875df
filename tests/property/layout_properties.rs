// Property-based tests for clustering and column assignment
// Random days of events must always satisfy the layout invariants

use std::collections::HashSet;

use calendar_grid::models::event::Event;
use calendar_grid::models::settings::LayoutSettings;
use calendar_grid::services::layout::{ColumnGridBuilder, LayoutEngine, TimeGrid};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

fn day_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Up to 24 events inside one day, with minute-level start jitter
fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0i64..1380, 1i64..=180), 0..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (start_minute, length))| {
                let start = day_start() + Duration::minutes(start_minute);
                let end = (start + Duration::minutes(length))
                    .min(day_start() + Duration::minutes(1439));
                Event::new(format!("e{}", i), format!("Event {}", i), start, end).unwrap()
            })
            .collect()
    })
}

fn arb_settings() -> impl Strategy<Value = LayoutSettings> {
    (prop::sample::select(vec![15u32, 30, 60]), 1usize..=5).prop_map(|(slot_minutes, column_limit)| {
        LayoutSettings {
            slot_minutes,
            column_limit,
        }
    })
}

proptest! {
    /// Property: every event lands in exactly one cluster
    #[test]
    fn prop_clusters_partition_input(events in arb_events()) {
        let engine = LayoutEngine::default();
        let refs: Vec<&Event> = events.iter().collect();
        let nodes = engine.clusters(&refs);

        let mut seen: Vec<&str> = nodes
            .iter()
            .flat_map(|node| node.events.iter().map(|event| event.id.as_str()))
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<&str> = events.iter().map(|event| event.id.as_str()).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);
    }

    /// Property: events in different clusters never overlap, and node bounds
    /// are the min/max of their events
    #[test]
    fn prop_clusters_are_independent(events in arb_events()) {
        let engine = LayoutEngine::default();
        let refs: Vec<&Event> = events.iter().collect();
        let nodes = engine.clusters(&refs);

        for (i, a) in nodes.iter().enumerate() {
            let min_start = a.events.iter().map(|event| event.start).min().unwrap();
            let max_end = a.events.iter().map(|event| event.end).max().unwrap();
            prop_assert_eq!(a.start, min_start);
            prop_assert_eq!(a.end, max_end);

            for b in nodes.iter().skip(i + 1) {
                for x in &a.events {
                    for y in &b.events {
                        prop_assert!(!x.range().overlaps(&y.range()));
                    }
                }
            }
        }
    }

    /// Property: two cells whose snapped ranges overlap never share a column,
    /// and width stays within the limit
    #[test]
    fn prop_overlapping_cells_get_distinct_columns(
        events in arb_events(),
        settings in arb_settings(),
    ) {
        let builder = ColumnGridBuilder::new(
            TimeGrid::new(i64::from(settings.slot_minutes)).unwrap(),
            settings.column_limit,
        );
        let engine = LayoutEngine::new(&settings).unwrap();
        let refs: Vec<&Event> = events.iter().collect();

        for node in engine.clusters(&refs) {
            let grid = builder.build(&node);
            prop_assert!(grid.width <= settings.column_limit);
            prop_assert_eq!(grid.cells.len() + grid.overflow.len(), node.len());

            for (i, a) in grid.cells.iter().enumerate() {
                prop_assert!(a.column < grid.width);
                for b in grid.cells.iter().skip(i + 1) {
                    if builder.collides(a.event, b.event) {
                        prop_assert_ne!(a.column, b.column);
                    }
                }
            }
        }
    }

    /// Property: the same input laid out twice, or in reverse order, gives
    /// the same structure
    #[test]
    fn prop_day_slots_are_deterministic(events in arb_events()) {
        let engine = LayoutEngine::default();
        let mut reversed = events.clone();
        reversed.reverse();

        let date = day_start().date();
        let first = engine.day_slots(date, &events);
        let second = engine.day_slots(date, &reversed);

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(a.range, b.range);
            prop_assert_eq!(a.column_event_ids(), b.column_event_ids());
        }
    }

    /// Property: every event of the day is shown exactly once, either in a
    /// column or in a slot's overflow
    #[test]
    fn prop_every_event_rendered_once(events in arb_events()) {
        let engine = LayoutEngine::default();
        let slots = engine.day_slots(day_start().date(), &events);

        let mut shown: Vec<&str> = Vec::new();
        for slot in &slots {
            shown.extend(slot.column_event_ids().into_iter().flatten());
            shown.extend(slot.overflow.iter().map(|event| event.id.as_str()));
        }
        let unique: HashSet<&str> = shown.iter().copied().collect();

        prop_assert_eq!(unique.len(), shown.len());
        prop_assert_eq!(shown.len(), events.len());
    }
}
