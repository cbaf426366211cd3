use anyhow::Result;
use dialoguer::Confirm;
use eventboard_core::{EventBoardError, EventGateway};
use owo_colors::OwoColorize;

use super::fetch_event;
use crate::utils::with_spinner;

pub async fn run(gateway: &impl EventGateway, id: &str, yes: bool) -> Result<()> {
    let event = fetch_event(gateway, id).await?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete \"{}\"?", event.title))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "  Nothing deleted".dimmed());
            return Ok(());
        }
    }

    match with_spinner("Deleting event...", gateway.delete(id)).await {
        Ok(()) => {}
        Err(EventBoardError::NotFound(_)) => anyhow::bail!("Event not found: {}", id),
        Err(e) => return Err(e.into()),
    }

    tracing::info!(id, "deleted event");
    println!("{}", format!("  Deleted: {}", event.title).red());
    Ok(())
}
