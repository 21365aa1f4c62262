//! Print a share link carrying the current events.

use anyhow::Result;
use owo_colors::OwoColorize;
use perennial_core::{csv, token};

use crate::link;
use crate::state;

pub fn run(base: &str) -> Result<()> {
    let calendar = state::load()?;

    if calendar.is_empty() {
        println!("{}", "Nothing to share yet.".yellow());
        return Ok(());
    }

    let encoded = token::encode(&csv::generate_csv(calendar.events()));
    let url = link::share_url(base, &encoded)?;
    println!("{}", url);
    Ok(())
}
