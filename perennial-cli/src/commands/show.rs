//! Show a month grid.

use anyhow::Result;
use chrono::Datelike;

use crate::render;
use crate::state;

pub fn run(month: Option<u32>) -> Result<()> {
    let month = match month {
        Some(m) if (1..=12).contains(&m) => m,
        Some(m) => anyhow::bail!("Month must be between 1 and 12, got {}", m),
        None => chrono::Local::now().month(),
    };

    let calendar = state::load()?;
    println!("{}", render::render_month(&calendar, month));
    Ok(())
}
