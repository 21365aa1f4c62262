//! The in-memory event collection.

use crate::event::Event;

/// Ordered collection of events. Insertion order is display order.
///
/// The UI layer owns the live value; the interchange functions in this
/// crate are pure transforms that never hold onto it. Duplicate
/// (month, day, title) entries are allowed and stay distinct through
/// their ids.
#[derive(Debug, Clone, Default)]
pub struct Calendar {
    events: Vec<Event>,
}

impl Calendar {
    pub fn new() -> Self {
        Calendar::default()
    }

    pub fn from_events(events: Vec<Event>) -> Self {
        Calendar { events }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Append an event at the end of the display order.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Remove an event by exact id. Returns the removed event, if any.
    pub fn remove(&mut self, id: &str) -> Option<Event> {
        let index = self.events.iter().position(|e| e.id == id)?;
        Some(self.events.remove(index))
    }

    /// Replace the whole collection (successful import or link load).
    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Events falling on a given month/day, in insertion order.
    pub fn events_on(&self, month: u32, day: u32) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.month == month && e.day == day)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, month: u32, day: u32, title: &str) -> Event {
        Event::new(id.to_string(), month, day, title)
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut calendar = Calendar::new();
        calendar.add(event("a", 3, 15, "Pi Day"));
        calendar.add(event("b", 1, 1, "New Year"));

        let titles: Vec<&str> = calendar.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Pi Day", "New Year"]);
    }

    #[test]
    fn test_duplicates_stay_distinct() {
        let mut calendar = Calendar::new();
        calendar.add(event("a", 7, 4, "Fireworks"));
        calendar.add(event("b", 7, 4, "Fireworks"));

        assert_eq!(calendar.len(), 2);
        assert!(calendar.remove("a").is_some());
        assert_eq!(calendar.len(), 1);
        assert_eq!(calendar.events()[0].id, "b");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut calendar = Calendar::new();
        calendar.add(event("a", 2, 14, "Valentine"));

        assert!(calendar.remove("missing").is_none());
        assert_eq!(calendar.len(), 1);
    }

    #[test]
    fn test_events_on_filters_by_month_and_day() {
        let mut calendar = Calendar::new();
        calendar.add(event("a", 3, 15, "Pi Day"));
        calendar.add(event("b", 3, 15, "Ides of March"));
        calendar.add(event("c", 3, 16, "Other"));

        let on_day = calendar.events_on(3, 15);
        assert_eq!(on_day.len(), 2);
        assert!(calendar.events_on(4, 15).is_empty());
    }
}
