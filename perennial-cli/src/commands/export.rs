//! Export the current events as a CSV file.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use perennial_core::csv;
use std::path::Path;

use crate::render;
use crate::state;

pub fn run(out: Option<&Path>) -> Result<()> {
    let calendar = state::load()?;
    let content = csv::generate_csv(calendar.events());

    let path = out.unwrap_or(Path::new(csv::EXPORT_FILENAME));
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let count = calendar.len();
    println!(
        "{}",
        format!(
            "Exported {} {} to {}",
            count,
            render::pluralize("event", count),
            path.display()
        )
        .green()
    );
    Ok(())
}
