//! Load events from a share link or bare token.

use anyhow::Result;
use owo_colors::OwoColorize;
use perennial_core::csv;
use perennial_core::ids::UuidGen;
use perennial_core::token;

use crate::link;
use crate::render;
use crate::state;

pub fn run(input: &str) -> Result<()> {
    let shared = link::extract_token(input)?;

    // A malformed token is "no shared data", never a crash; current
    // state stays untouched.
    let text = match token::decode(&shared) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", format!("Could not read link: {}", e).yellow());
            return Ok(());
        }
    };

    let mut ids = UuidGen;
    let events = csv::parse_events(&text, &mut ids);

    if events.is_empty() {
        println!(
            "{}",
            "Link contained no usable events; keeping current events.".yellow()
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
        format!(
            "Loaded {} {} from link.",
            count,
            render::pluralize("event", count)
        )
        .green()
    );
    println!("{}", render::render_month(&calendar, first_month));
    Ok(())
}
