//! Import events from a CSV file (the direct upload path).

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use perennial_core::csv;
use perennial_core::ids::UuidGen;
use std::path::Path;

use crate::render;
use crate::state;

pub fn run(file: &Path) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let mut ids = UuidGen;
    let events = csv::parse_events(&text, &mut ids);

    // Nothing usable is not an error; prior state stays as it was.
    if events.is_empty() {
        println!(
            "{}",
            "No usable rows found; keeping current events.".yellow()
        );
        return Ok(());
    }

    let first_month = events[0].month;
    let mut calendar = state::load()?;
    calendar.replace(events);
    state::persist(&calendar)?;

    let count = calendar.len();
    println!(
        "{}",
        format!("Imported {} {}.", count, render::pluralize("event", count)).green()
    );
    println!("{}", render::render_month(&calendar, first_month));
    Ok(())
}
