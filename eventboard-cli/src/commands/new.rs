use anyhow::Result;
use eventboard_core::{EventDraft, EventGateway};
use owo_colors::OwoColorize;

use super::form;
use super::print_json;
use crate::EventFields;
use crate::utils::with_spinner;

pub async fn run(gateway: &impl EventGateway, fields: EventFields, json: bool) -> Result<()> {
    let interactive = fields.title.is_none()
        || fields.date.is_none()
        || fields.time.is_none()
        || fields.location.is_none();
    let pick_category = interactive && fields.category.is_none();
    let pick_priority = interactive && fields.priority.is_none();
    let ask_description = interactive && fields.description.is_none();

    let mut draft = EventDraft::default();
    fields.apply_to(&mut draft);

    if draft.title.is_empty() {
        draft.title = form::prompt_text("  Title", "")?;
    }
    if ask_description {
        draft.description = form::prompt_optional("  Description (skip)", None)?;
    }
    if draft.date.is_empty() {
        draft.date = form::prompt_date("")?;
    }
    if draft.time.is_empty() {
        draft.time = form::prompt_time("")?;
    }
    if draft.location.is_empty() {
        draft.location = form::prompt_text("  Where?", "")?;
    }
    if pick_category {
        draft.category = form::prompt_category(&draft.category)?;
    }
    if pick_priority {
        draft.priority = form::prompt_priority(&draft.priority)?;
    }

    let record = draft.validate()?.into_record(None);
    let created = with_spinner("Creating event...", gateway.create(record)).await?;
    tracing::info!(id = %created.id, "created event");

    if json {
        return print_json(&created);
    }

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {} ({})", created.title, created.id).green());
    Ok(())
}
