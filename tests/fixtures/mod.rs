// Test fixtures - reusable test data
// Provides consistent days and events across the layout tests

#![allow(dead_code)]

use calendar_grid::models::event::Event;
use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Jan 1, 2021 (a Friday)
    pub fn jan_1_2021() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Time of day on Jan 1, 2021
    pub fn at(hour: u32, minute: u32) -> NaiveDateTime {
        jan_1_2021().and_hms_opt(hour, minute, 0).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Event on Jan 1, 2021 between two `(hour, minute)` pairs
    pub fn event(id: &str, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(
            id,
            format!("Event {}", id),
            dates::at(start.0, start.1),
            dates::at(end.0, end.1),
        )
        .unwrap()
    }

    /// `count` events all occupying 00:00-00:30
    pub fn identical_half_hours(count: usize) -> Vec<Event> {
        (1..=count)
            .map(|i| event(&i.to_string(), (0, 0), (0, 30)))
            .collect()
    }

    /// A busy working day with a mix of overlaps, chains and free gaps
    pub fn busy_day() -> Vec<Event> {
        vec![
            event("standup", (9, 0), (9, 15)),
            event("planning", (9, 0), (10, 30)),
            event("review", (9, 30), (10, 0)),
            event("one_on_one", (10, 0), (10, 30)),
            event("lunch", (12, 0), (13, 0)),
            event("workshop", (14, 0), (16, 0)),
            event("call", (15, 30), (16, 30)),
            event("retro", (16, 30), (17, 30)),
        ]
    }
}
