//! Interactive prompts shared by `new` and `edit`.

use anyhow::Result;
use dialoguer::{Input, Select};
use eventboard_core::constants::{CATEGORIES, PRIORITIES};
use eventboard_core::datetime::{DateTimeError, normalize_date, normalize_time};
use owo_colors::OwoColorize;

pub fn prompt_text(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .interact_text()?;
    Ok(value)
}

/// Optional text; an empty answer means "none".
pub fn prompt_optional(prompt: &str, initial: Option<&str>) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial.unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;
    Ok(if value.trim().is_empty() { None } else { Some(value) })
}

pub fn prompt_date(initial: &str) -> Result<String> {
    prompt_with_retry("  Date (YYYY-MM-DD)", initial, normalize_date)
}

pub fn prompt_time(initial: &str) -> Result<String> {
    prompt_with_retry("  Time (HH:MM)", initial, normalize_time)
}

/// Pick one of `options`, starting on `current` when it is one of them.
pub fn prompt_choice(prompt: &str, options: &[&str], current: &str) -> Result<String> {
    let default = options.iter().position(|o| *o == current).unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;
    Ok(options[index].to_string())
}

pub fn prompt_category(current: &str) -> Result<String> {
    prompt_choice("  Category", &CATEGORIES[..], current)
}

pub fn prompt_priority(current: &str) -> Result<String> {
    prompt_choice("  Priority", &PRIORITIES[..], current)
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, initial: &str, parse: F) -> Result<String>
where
    F: Fn(&str) -> Result<String, DateTimeError>,
{
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .interact_text()?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
