//! The list of events actually shown: filtered, searched and in chronological order.

use std::cmp::Ordering;

use crate::datetime::event_instant;
use crate::event::EventRecord;
use crate::filter::FilterState;

/// Compute the visible events for `filter`.
///
/// A record is kept when the lower-cased search key occurs in its title,
/// description or location, and its category passes the category filter.
/// Survivors are sorted by start date/time; records whose date or time can't
/// be parsed go last. The sort is stable, so ties keep their input order.
pub fn visible_events(events: &[EventRecord], filter: &FilterState) -> Vec<EventRecord> {
    let search = filter.search_key.to_lowercase();

    let mut visible: Vec<EventRecord> = events
        .iter()
        .filter(|event| matches_search(event, &search) && filter.category.matches(&event.category))
        .cloned()
        .collect();

    visible.sort_by(compare_chronologically);
    visible
}

/// `search` must already be lower-cased.
fn matches_search(event: &EventRecord, search: &str) -> bool {
    event.title.to_lowercase().contains(search)
        || event
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(search))
        || event.location.to_lowercase().contains(search)
}

fn compare_chronologically(a: &EventRecord, b: &EventRecord) -> Ordering {
    match (
        event_instant(&a.date, &a.time),
        event_instant(&b.date, &b.time),
    ) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
