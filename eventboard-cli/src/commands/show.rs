use anyhow::Result;
use eventboard_core::EventGateway;

use super::{fetch_event, print_json};
use crate::render::render_details;

pub async fn run(gateway: &impl EventGateway, id: &str, json: bool) -> Result<()> {
    let event = fetch_event(gateway, id).await?;

    if json {
        return print_json(&event);
    }

    println!("{}", render_details(&event));
    Ok(())
}
