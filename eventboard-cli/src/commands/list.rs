use anyhow::Result;
use eventboard_core::{CategoryFilter, EventGateway, EventStore};

use super::print_json;
use crate::render::render_list;
use crate::utils::with_spinner;

pub async fn run(
    gateway: &impl EventGateway,
    category: Option<String>,
    search: Option<String>,
    json: bool,
) -> Result<()> {
    let events = with_spinner("Fetching events...", gateway.list()).await?;

    let mut store = EventStore::new();
    store.set_events(events);
    if let Some(category) = category {
        store.set_category_filter(CategoryFilter::parse(&category));
    }
    if let Some(search) = search {
        store.set_search_key(search);
    }

    let visible = store.visible();
    tracing::debug!(
        total = store.events().len(),
        visible = visible.len(),
        "derived visible events"
    );

    if json {
        return print_json(&visible);
    }

    println!("{}", render_list(&visible));
    Ok(())
}
