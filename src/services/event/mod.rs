// Event service
// Caller-owned in-memory event store feeding the layout

use chrono::NaiveDate;

use crate::models::event::{Event, EventOperation, TimeRange};

/// Anything that can hand the layout an immutable snapshot of events.
///
/// The layout only ever reads through this trait, so it never depends on a
/// particular store.
pub trait EventSource {
    fn events(&self) -> &[Event];
}

impl EventSource for [Event] {
    fn events(&self) -> &[Event] {
        self
    }
}

impl EventSource for Vec<Event> {
    fn events(&self) -> &[Event] {
        self
    }
}

/// In-memory event list with the edits the week view performs.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    display_date: Option<NaiveDate>,
    is_any_event_dragging: bool,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn add(&mut self, event: Event) {
        log::debug!("Adding event '{}'", event.id);
        self.events.push(event);
    }

    /// Replace the event with `id`, keeping the id. Returns whether it existed.
    pub fn edit(&mut self, id: &str, data: Event) -> bool {
        match self.events.iter_mut().find(|event| event.id == id) {
            Some(event) => {
                *event = Event {
                    id: event.id.clone(),
                    ..data
                };
                true
            }
            None => false,
        }
    }

    pub fn add_or_edit(&mut self, id: &str, data: Event) {
        if !self.edit(id, data.clone()) {
            self.add(Event {
                id: id.to_string(),
                ..data
            });
        }
    }

    /// Remove the event with `id`, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<Event> {
        let index = self.events.iter().position(|event| event.id == id)?;
        Some(self.events.remove(index))
    }

    /// Move an event so it starts at `target.start`, keeping its duration.
    ///
    /// Returns the updated event, or `None` if no event has that id.
    pub fn relocate(&mut self, id: &str, target: &TimeRange) -> Option<Event> {
        let event = self.events.iter_mut().find(|event| event.id == id)?;
        let duration = event.duration();
        event.start = target.start;
        event.end = target.start + duration;
        event.operation = EventOperation::Dragged;

        log::debug!("Relocated event '{}' to {}", event.id, event.start);
        Some(event.clone())
    }

    pub fn display_date(&self) -> Option<NaiveDate> {
        self.display_date
    }

    pub fn set_display_date(&mut self, date: NaiveDate) {
        self.display_date = Some(date);
    }

    pub fn is_any_event_dragging(&self) -> bool {
        self.is_any_event_dragging
    }

    pub fn set_dragging(&mut self, is_dragging: bool) {
        self.is_any_event_dragging = is_dragging;
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSource for EventStore {
    fn events(&self) -> &[Event] {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn sample(id: &str) -> Event {
        Event::new(id, "Meeting", at(9, 0), at(10, 30)).unwrap()
    }

    #[test]
    fn test_add_and_get() {
        let mut store = EventStore::new();
        assert!(store.is_empty());
        store.add(sample("1"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("1").map(|e| e.title.as_str()), Some("Meeting"));
        assert!(store.get("2").is_none());
    }

    #[test]
    fn test_edit_keeps_id() {
        let mut store = EventStore::with_events(vec![sample("1")]);
        let mut changed = sample("other");
        changed.title = "Renamed".to_string();

        assert!(store.edit("1", changed));
        let event = store.get("1").unwrap();
        assert_eq!(event.title, "Renamed");
        assert!(store.get("other").is_none());
    }

    #[test]
    fn test_edit_missing_returns_false() {
        let mut store = EventStore::new();
        assert!(!store.edit("1", sample("1")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_or_edit() {
        let mut store = EventStore::new();
        store.add_or_edit("new", sample("ignored"));
        assert!(store.get("new").is_some());

        let mut changed = sample("new");
        changed.title = "Updated".to_string();
        store.add_or_edit("new", changed);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("new").unwrap().title, "Updated");
    }

    #[test]
    fn test_remove() {
        let mut store = EventStore::with_events(vec![sample("1"), sample("2")]);
        assert_eq!(store.remove("1").map(|e| e.id), Some("1".to_string()));
        assert!(store.remove("1").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_relocate_preserves_duration() {
        let mut store = EventStore::with_events(vec![sample("1")]);
        let target = TimeRange::new(at(14, 0), at(14, 30));

        let moved = store.relocate("1", &target).unwrap();
        assert_eq!(moved.start, at(14, 0));
        assert_eq!(moved.end, at(15, 30));
        assert_eq!(moved.duration(), Duration::minutes(90));
        assert_eq!(moved.operation, EventOperation::Dragged);
        assert_eq!(store.get("1"), Some(&moved));
    }

    #[test]
    fn test_relocate_unknown_event() {
        let mut store = EventStore::new();
        assert!(store
            .relocate("nope", &TimeRange::new(at(1, 0), at(1, 30)))
            .is_none());
    }

    #[test]
    fn test_ui_flags() {
        let mut store = EventStore::new();
        assert!(store.display_date().is_none());
        store.set_display_date(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(store.display_date(), NaiveDate::from_ymd_opt(2021, 1, 1));

        store.set_dragging(true);
        assert!(store.is_any_event_dragging());
    }

    #[test]
    fn test_sources_expose_same_events() {
        let events = vec![sample("1")];
        let store = EventStore::with_events(events.clone());
        assert_eq!(store.events(), events.events());
        assert_eq!(events.as_slice().events().len(), 1);
    }
}
