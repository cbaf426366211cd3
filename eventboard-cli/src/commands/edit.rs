use anyhow::Result;
use eventboard_core::{EventBoardError, EventDraft, EventGateway};
use owo_colors::OwoColorize;

use super::form;
use super::{fetch_event, print_json};
use crate::EventFields;
use crate::utils::with_spinner;

pub async fn run(
    gateway: &impl EventGateway,
    id: &str,
    fields: EventFields,
    json: bool,
) -> Result<()> {
    let existing = fetch_event(gateway, id).await?;
    let mut draft = EventDraft::from_record(&existing);

    if fields.is_empty() {
        draft.title = form::prompt_text("  Title", &draft.title)?;
        draft.description =
            form::prompt_optional("  Description", draft.description.as_deref())?;
        draft.date = form::prompt_date(&draft.date)?;
        draft.time = form::prompt_time(&draft.time)?;
        draft.location = form::prompt_text("  Where?", &draft.location)?;
        draft.category = form::prompt_category(&draft.category)?;
        draft.priority = form::prompt_priority(&draft.priority)?;
    } else {
        fields.apply_to(&mut draft);
    }

    let record = draft.validate()?.into_record(Some(existing.id.clone()));
    let updated = match with_spinner("Saving event...", gateway.update(id, record)).await {
        Ok(updated) => updated,
        Err(EventBoardError::NotFound(_)) => anyhow::bail!("Event not found: {}", id),
        Err(e) => return Err(e.into()),
    };
    tracing::info!(id, "updated event");

    if json {
        return print_json(&updated);
    }

    println!("{}", format!("  Saved: {}", updated.title).yellow());
    Ok(())
}
