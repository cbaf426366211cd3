//! Client-side event state.
//!
//! [`EventStore`] holds the last-fetched events plus the current filter. It
//! changes only through [`Action`]s applied by [`EventStore::apply`], so every
//! transition can be tested without a gateway or a UI.

use std::collections::HashSet;

use crate::event::EventRecord;
use crate::filter::{CategoryFilter, FilterState};
use crate::visible::visible_events;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the whole list. Later duplicates of an id are dropped.
    SetEvents(Vec<EventRecord>),
    SetCategoryFilter(CategoryFilter),
    SetSearchKey(String),
    /// Remove the event with this id, if present
    DeleteEvent(String),
    /// Replace the event with the same id in place, or append it
    UpsertEvent(EventRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<EventRecord>,
    filter: FilterState,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetEvents(events) => {
                let mut seen = HashSet::new();
                self.events = events
                    .into_iter()
                    .filter(|event| seen.insert(event.id.clone()))
                    .collect();
            }
            Action::SetCategoryFilter(category) => self.filter.category = category,
            Action::SetSearchKey(search_key) => self.filter.search_key = search_key,
            Action::DeleteEvent(id) => self.events.retain(|event| event.id != id),
            Action::UpsertEvent(record) => {
                match self.events.iter_mut().find(|event| event.id == record.id) {
                    Some(existing) => *existing = record,
                    None => self.events.push(record),
                }
            }
        }
    }

    pub fn set_events(&mut self, events: Vec<EventRecord>) {
        self.apply(Action::SetEvents(events));
    }

    pub fn set_category_filter(&mut self, category: CategoryFilter) {
        self.apply(Action::SetCategoryFilter(category));
    }

    pub fn set_search_key(&mut self, search_key: impl Into<String>) {
        self.apply(Action::SetSearchKey(search_key.into()));
    }

    pub fn delete_event(&mut self, id: &str) {
        self.apply(Action::DeleteEvent(id.to_string()));
    }

    pub fn upsert_event(&mut self, record: EventRecord) {
        self.apply(Action::UpsertEvent(record));
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn get(&self, id: &str) -> Option<&EventRecord> {
        self.events.iter().find(|event| event.id == id)
    }

    /// Events to display under the current filter.
    pub fn visible(&self) -> Vec<EventRecord> {
        visible_events(&self.events, &self.filter)
    }
}
