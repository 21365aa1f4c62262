//! Add a single event.
//!
//! Day-vs-month-length validation lives here, at the UI boundary; the
//! interchange layer deliberately does not enforce it.

use anyhow::Result;
use owo_colors::OwoColorize;
use perennial_core::Event;
use perennial_core::ids::{IdGen, UuidGen};
use perennial_core::month::{days_in_month, month_name};

use crate::render;
use crate::state;

pub fn run(month: u32, day: u32, title: &str) -> Result<()> {
    if !(1..=12).contains(&month) {
        anyhow::bail!("Month must be between 1 and 12, got {}", month);
    }

    let limit = days_in_month(month);
    if day < 1 || day > limit {
        anyhow::bail!("{} has {} days, got day {}", month_name(month), limit, day);
    }

    let title = title.trim();
    if title.is_empty() {
        anyhow::bail!("Title must not be empty");
    }

    let mut ids = UuidGen;
    let event = Event::new(ids.next_id(), month, day, title);

    let mut calendar = state::load()?;
    calendar.add(event);
    state::persist(&calendar)?;

    println!("{}", format!("Added: {}", title).green());
    println!("{}", render::render_month(&calendar, month));
    Ok(())
}
