use anyhow::Result;
use eventboard_core::share::share_links;
use eventboard_core::{AppConfig, EventGateway};
use owo_colors::OwoColorize;

use super::{fetch_event, print_json};
use crate::render::Render;

pub async fn run(
    gateway: &impl EventGateway,
    config: &AppConfig,
    id: &str,
    json: bool,
) -> Result<()> {
    let event = fetch_event(gateway, id).await?;
    let links = share_links(&event, &config.public_url);

    if json {
        return print_json(&links);
    }

    println!("{} {}", "Share".bold(), event.title.bold());
    println!("{}", links.render());
    Ok(())
}
