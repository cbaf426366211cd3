//! Terminal rendering for eventboard types.
//!
//! Extension traits that add colored output to eventboard-core types using owo_colors.

use chrono::NaiveDate;
use eventboard_core::datetime::{display_date, parse_date, parse_time};
use eventboard_core::share::ShareLinks;
use eventboard_core::{EventRecord, Priority};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Priority {
    fn render(&self) -> String {
        match self {
            Priority::High => "High".red().to_string(),
            Priority::Medium => "Medium".yellow().to_string(),
            Priority::Low => "Low".green().to_string(),
            Priority::Other(p) => p.dimmed().to_string(),
        }
    }
}

/// One line in the events list: time, title, category and priority.
impl Render for EventRecord {
    fn render(&self) -> String {
        let category = format!("[{}]", self.category);
        format!(
            "  {} {} {} {}",
            format_time(&self.time),
            self.title.bold(),
            category.dimmed(),
            self.priority_level().render()
        )
    }
}

impl Render for ShareLinks {
    fn render(&self) -> String {
        [
            ("Page", &self.page),
            ("Twitter", &self.twitter),
            ("Facebook", &self.facebook),
            ("LinkedIn", &self.linkedin),
            ("Email", &self.email),
        ]
        .iter()
        .map(|(label, link)| format!("  {:<9} {}", format!("{label}:").dimmed(), link))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Full detail view of one event.
pub fn render_details(event: &EventRecord) -> String {
    let mut lines = vec![event.title.bold().to_string()];

    if let Some(description) = &event.description {
        lines.push(String::new());
        lines.push(description.clone());
    }

    lines.push(String::new());
    lines.push(field("When", &format!("{} {}", display_date(&event.date), event.time)));
    lines.push(field("Where", &event.location));
    lines.push(field("Category", &event.category));
    lines.push(format!("  {:<10} {}", "Priority:".dimmed(), event.priority_level().render()));
    if let Some(picture) = &event.picture {
        lines.push(field("Picture", picture));
    }
    lines.push(field("Id", &event.id));

    lines.join("\n")
}

fn field(label: &str, value: &str) -> String {
    format!("  {:<10} {}", format!("{label}:").dimmed(), value)
}

/// Render an already-sorted list grouped under date headings.
pub fn render_list(events: &[EventRecord]) -> String {
    if events.is_empty() {
        return "No events found.".dimmed().to_string();
    }

    let mut lines = Vec::new();
    let mut current_label: Option<String> = None;

    for event in events {
        let label = format_date_label(&event.date);
        if current_label.as_ref() != Some(&label) {
            if current_label.is_some() {
                lines.push(String::new());
            }
            lines.push(label.bold().to_string());
            current_label = Some(label);
        }
        lines.push(event.render());
    }

    lines.join("\n")
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_date_label(date: &str) -> String {
    let today = chrono::Local::now().date_naive();
    match parse_date(date) {
        Ok(date) => relative_label(date, today),
        Err(_) if date.is_empty() => "No date".to_string(),
        Err(_) => date.to_string(),
    }
}

fn relative_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d, %Y").to_string(),
    }
}

/// Right-aligned `HH:MM`, or the raw string when it can't be parsed
fn format_time(time: &str) -> String {
    match parse_time(time) {
        Ok(t) => format!("{:>7}", t.format("%H:%M")),
        Err(_) => format!("{:>7}", time),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_label() {
        let today = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
        assert_eq!(relative_label(today, today), "Today");
        assert_eq!(
            relative_label(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(), today),
            "Tomorrow"
        );
        assert_eq!(
            relative_label(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), today),
            "Wed Jan 1, 2025"
        );
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("08:00 pm"), "  20:00");
        assert_eq!(format_time("later"), "  later");
    }

    #[test]
    fn test_format_date_label_fallbacks() {
        assert_eq!(format_date_label(""), "No date");
        assert_eq!(format_date_label("someday"), "someday");
    }
}
