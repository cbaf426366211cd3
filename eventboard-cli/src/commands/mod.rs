pub mod categories;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod share;
pub mod show;

mod form;

use anyhow::Result;
use eventboard_core::{EventBoardError, EventGateway, EventRecord};

use crate::utils::with_spinner;

/// Fetch one event, turning a missing document into a readable error.
pub(crate) async fn fetch_event(gateway: &impl EventGateway, id: &str) -> Result<EventRecord> {
    match with_spinner("Fetching event...", gateway.get(id)).await {
        Ok(event) => Ok(event),
        Err(EventBoardError::NotFound(_)) => anyhow::bail!("Event not found: {}", id),
        Err(e) => Err(e.into()),
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
