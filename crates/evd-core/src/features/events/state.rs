//! Events store.
//!
//! One ordered sequence of events plus the current user's RSVP map. Mutations
//! that target a missing id do nothing and report nothing; callers that care
//! check with [`EventsStore::event_by_id`] first.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::model::{Event, EventPatch, EventStats, NewEvent, RsvpStatus};
use super::seed;
use crate::clock::{Clock, TimestampIds};

#[derive(Debug)]
pub struct EventsStore {
    events: Vec<Event>,
    rsvps: BTreeMap<i64, RsvpStatus>,
    clock: Arc<dyn Clock>,
    ids: TimestampIds,
}

impl EventsStore {
    /// Creates an empty store.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            events: Vec::new(),
            rsvps: BTreeMap::new(),
            clock,
            ids: TimestampIds::new(),
        }
    }

    /// Creates a store holding the sample events and RSVPs.
    pub fn with_seed(clock: Arc<dyn Clock>) -> Self {
        Self {
            events: seed::seed_events(),
            rsvps: seed::seed_rsvps(),
            clock,
            ids: TimestampIds::new(),
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn rsvps(&self) -> &BTreeMap<i64, RsvpStatus> {
        &self.rsvps
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Appends a new event and returns the stored record. A caller-supplied
    /// id is kept; otherwise one is issued from the clock.
    pub fn add_event(&mut self, input: NewEvent) -> Event {
        let id = match input.id {
            Some(id) => id,
            None => self.ids.issue(self.clock.as_ref()),
        };
        let event = input.into_event(id);
        tracing::debug!(id, title = %event.title, "event added");
        self.events.push(event.clone());
        event
    }

    /// Shallow-merges `patch` into the first event with `id`.
    pub fn update_event(&mut self, id: i64, patch: EventPatch) {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                patch.apply_to(event);
                tracing::debug!(id, "event updated");
            }
            None => tracing::trace!(id, "update ignored, no such event"),
        }
    }

    /// Removes the first event with `id`.
    pub fn delete_event(&mut self, id: i64) {
        match self.events.iter().position(|e| e.id == id) {
            Some(index) => {
                self.events.remove(index);
                tracing::debug!(id, "event deleted");
            }
            None => tracing::trace!(id, "delete ignored, no such event"),
        }
    }

    /// Records the current user's response. The event does not have to exist.
    pub fn rsvp_to_event(&mut self, event_id: i64, status: RsvpStatus) {
        tracing::debug!(event_id, %status, "rsvp recorded");
        self.rsvps.insert(event_id, status);
    }

    pub fn event_by_id(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Events dated within `start..=end`, in store order.
    pub fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect()
    }

    /// Events whose date (midnight UTC) is not before now. An event dated
    /// today is past once the day has started. Reads the clock on every call.
    pub fn upcoming_events(&self) -> Vec<&Event> {
        let now = self.clock.now();
        self.events
            .iter()
            .filter(|e| day_start(e.date) >= now)
            .collect()
    }

    /// Events whose date (midnight UTC) is before now. Reads the clock on
    /// every call.
    pub fn past_events(&self) -> Vec<&Event> {
        let now = self.clock.now();
        self.events
            .iter()
            .filter(|e| day_start(e.date) < now)
            .collect()
    }

    pub fn events_by_category(&self, category: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// The current user's response, if any. An empty status reads as none.
    pub fn user_rsvp(&self, event_id: i64) -> Option<&RsvpStatus> {
        self.rsvps
            .get(&event_id)
            .filter(|status| !status.as_str().is_empty())
    }

    /// Counts over the whole store. Upcoming and past are each computed by
    /// their own query.
    pub fn event_stats(&self) -> EventStats {
        EventStats {
            total: self.events.len(),
            upcoming: self.upcoming_events().len(),
            past: self.past_events().len(),
            total_attendees: self.events.iter().map(|e| e.attendees).sum(),
        }
    }
}

/// Instant an event's date begins.
fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeDelta;

    use super::*;
    use crate::clock::FixedClock;
    use crate::features::events::model::{EVENT_CREATOR, Location};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded(today: NaiveDate) -> EventsStore {
        EventsStore::with_seed(Arc::new(FixedClock::new(today)))
    }

    fn new_event(title: &str) -> NewEvent {
        NewEvent {
            id: None,
            title: title.to_string(),
            description: "desc".to_string(),
            date: date(2024, 6, 1),
            time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            location: Location {
                name: "Pier 17".to_string(),
                lat: 40.7056,
                lng: -74.0018,
            },
            max_attendees: 10,
            category: "Music".to_string(),
            attendees: Some(999),
            created_by: Some("someone".to_string()),
        }
    }

    fn ids(events: &[&Event]) -> Vec<i64> {
        events.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_add_event_forces_attendees_and_creator() {
        let mut store = seeded(date(2024, 1, 15));
        let before = store.len();
        let added = store.add_event(new_event("T"));

        assert_eq!(added.attendees, 0);
        assert_eq!(added.created_by, EVENT_CREATOR);
        assert_eq!(store.len(), before + 1);
        assert_eq!(store.events().last(), Some(&added));
        assert_eq!(store.event_by_id(added.id), Some(&added));
    }

    #[test]
    fn test_add_event_keeps_caller_id() {
        let mut store = seeded(date(2024, 1, 15));
        let input: NewEvent = serde_json::from_str(
            r#"{"id":77,"title":"Pinned","date":"2024-03-01","time":"18:00",
                "location":{"name":"Hall","lat":1.0,"lng":2.0},"attendees":5}"#,
        )
        .unwrap();
        let added = store.add_event(input);
        assert_eq!(added.id, 77);
        assert_eq!(added.attendees, 0);
        assert_eq!(store.event_by_id(77), Some(&added));
    }

    #[test]
    fn test_add_event_ids_do_not_collide() {
        let mut store = seeded(date(2024, 1, 15));
        let a = store.add_event(new_event("A")).id;
        let b = store.add_event(new_event("B")).id;
        assert_ne!(a, b);
        assert!(store.event_by_id(1).is_some());
    }

    #[test]
    fn test_update_event_changes_only_given_fields() {
        let mut store = seeded(date(2024, 1, 15));
        let original = store.event_by_id(5).cloned().unwrap();

        store.update_event(
            5,
            EventPatch {
                title: Some("New".to_string()),
                ..EventPatch::default()
            },
        );

        let updated = store.event_by_id(5).unwrap();
        let mut expected = original;
        expected.title = "New".to_string();
        assert_eq!(updated, &expected);
    }

    #[test]
    fn test_update_missing_event_is_a_no_op() {
        let mut store = seeded(date(2024, 1, 15));
        let before = store.events().to_vec();
        store.update_event(
            4242,
            EventPatch {
                title: Some("Ghost".to_string()),
                ..EventPatch::default()
            },
        );
        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn test_update_does_not_validate() {
        let mut store = seeded(date(2024, 1, 15));
        store.update_event(
            2,
            EventPatch {
                attendees: Some(-5),
                category: Some("Nonsense".to_string()),
                ..EventPatch::default()
            },
        );
        let event = store.event_by_id(2).unwrap();
        assert_eq!(event.attendees, -5);
        assert_eq!(event.category, "Nonsense");
    }

    #[test]
    fn test_delete_event_is_idempotent() {
        let mut store = seeded(date(2024, 1, 15));
        store.delete_event(7);
        assert_eq!(store.len(), 24);
        assert!(store.event_by_id(7).is_none());

        store.delete_event(7);
        assert_eq!(store.len(), 24);
    }

    #[test]
    fn test_delete_keeps_order_of_the_rest() {
        let mut store = seeded(date(2024, 1, 15));
        store.delete_event(2);
        let head: Vec<i64> = store.events().iter().take(3).map(|e| e.id).collect();
        assert_eq!(head, vec![1, 3, 4]);
    }

    #[test]
    fn test_rsvp_is_recorded_for_unknown_events() {
        let mut store = seeded(date(2024, 1, 15));
        store.rsvp_to_event(999, RsvpStatus::from("maybe"));
        assert_eq!(
            store.user_rsvp(999),
            Some(&RsvpStatus::Other("maybe".to_string()))
        );
    }

    #[test]
    fn test_rsvp_overwrites_previous_status() {
        let mut store = seeded(date(2024, 1, 15));
        assert_eq!(store.user_rsvp(3), Some(&RsvpStatus::Interested));
        store.rsvp_to_event(3, RsvpStatus::Attending);
        assert_eq!(store.user_rsvp(3), Some(&RsvpStatus::Attending));
        assert_eq!(store.user_rsvp(2), None);
    }

    #[test]
    fn test_empty_rsvp_reads_as_none() {
        let mut store = seeded(date(2024, 1, 15));
        store.rsvp_to_event(4, RsvpStatus::from(""));
        assert_eq!(store.user_rsvp(4), None);
        assert!(store.rsvps().contains_key(&4));
    }

    #[test]
    fn test_upcoming_and_past_partition_seed_data() {
        let store = seeded(date(2024, 1, 15));
        let upcoming: HashSet<i64> = ids(&store.upcoming_events()).into_iter().collect();
        let past: HashSet<i64> = ids(&store.past_events()).into_iter().collect();
        let all: HashSet<i64> = store.events().iter().map(|e| e.id).collect();

        assert!(upcoming.is_disjoint(&past));
        assert_eq!(&upcoming | &past, all);
        assert_eq!(past.len(), 9);
        assert_eq!(upcoming.len(), 16);
        // Tech Meetup is dated 2024-01-15; by noon it has started.
        assert!(past.contains(&9));
        assert!(!upcoming.contains(&9));
    }

    #[test]
    fn test_event_dated_today_is_upcoming_only_at_midnight() {
        let midnight = date(2024, 1, 15).and_time(NaiveTime::MIN).and_utc();
        let store = EventsStore::with_seed(Arc::new(FixedClock::at(midnight)));
        assert!(ids(&store.upcoming_events()).contains(&9));

        let later = FixedClock::at(midnight + TimeDelta::milliseconds(1));
        let store = EventsStore::with_seed(Arc::new(later));
        assert!(ids(&store.past_events()).contains(&9));
        assert_eq!(store.event_stats().past, 9);
    }

    #[test]
    fn test_everything_is_past_after_the_season() {
        let store = seeded(date(2026, 10, 16));
        assert!(store.upcoming_events().is_empty());
        assert_eq!(store.past_events().len(), 25);
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let store = seeded(date(2024, 1, 15));
        let january = store.events_in_range(date(2024, 1, 1), date(2024, 1, 10));
        assert_eq!(ids(&january), vec![4, 5, 6, 7]);

        let single_day = store.events_in_range(date(2024, 2, 14), date(2024, 2, 14));
        assert_eq!(ids(&single_day), vec![19]);

        assert!(
            store
                .events_in_range(date(2024, 3, 9), date(2024, 3, 1))
                .is_empty()
        );
    }

    #[test]
    fn test_date_range_keeps_store_order() {
        let store = seeded(date(2024, 1, 15));
        // Comedy Night (18) is listed before Valentine's Day Dance (19)
        // despite the later date.
        let week = store.events_in_range(date(2024, 2, 12), date(2024, 2, 18));
        assert_eq!(ids(&week), vec![18, 19]);
    }

    #[test]
    fn test_category_is_exact_match() {
        let store = seeded(date(2024, 1, 15));
        assert_eq!(ids(&store.events_by_category("Food")), vec![1, 7, 12, 23]);
        assert!(store.events_by_category("food").is_empty());
        assert!(store.events_by_category("").is_empty());
    }

    #[test]
    fn test_stats() {
        let store = seeded(date(2024, 1, 15));
        let stats = store.event_stats();
        assert_eq!(stats.total, store.len());
        assert_eq!(stats.upcoming, 16);
        assert_eq!(stats.past, 9);
        assert_eq!(stats.total_attendees, 2117);
        assert_eq!(
            stats.total_attendees,
            store.events().iter().map(|e| e.attendees).sum::<i64>()
        );
    }

    #[test]
    fn test_stats_follow_mutations() {
        let mut store = seeded(date(2024, 1, 15));
        store.add_event(new_event("Fresh"));
        store.delete_event(1);
        let stats = store.event_stats();
        assert_eq!(stats.total, 25);
        assert_eq!(stats.total_attendees, 2117 - 89);
        assert_eq!(stats.upcoming + stats.past, stats.total);
    }

    #[test]
    fn test_empty_store() {
        let store = EventsStore::new(Arc::new(FixedClock::new(date(2024, 1, 15))));
        assert!(store.is_empty());
        assert!(store.rsvps().is_empty());
        assert_eq!(
            store.event_stats(),
            EventStats {
                total: 0,
                upcoming: 0,
                past: 0,
                total_attendees: 0,
            }
        );
    }
}
