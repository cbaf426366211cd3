use anyhow::Result;
use eventboard_core::constants::{CATEGORIES, CATEGORY_ALL, PRIORITIES};
use owo_colors::OwoColorize;

use super::print_json;

pub fn run(json: bool) -> Result<()> {
    if json {
        return print_json(&serde_json::json!({
            "categories": CATEGORIES,
            "priorities": PRIORITIES,
        }));
    }

    println!("{}", "Categories".bold());
    println!("  {} {}", CATEGORY_ALL, "(no filter)".dimmed());
    for category in CATEGORIES {
        println!("  {}", category);
    }

    println!();
    println!("{}", "Priorities".bold());
    for priority in PRIORITIES {
        println!("  {}", priority);
    }

    Ok(())
}
