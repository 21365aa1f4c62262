//! Loading and persisting the calendar around each command.
//!
//! The CLI owns the live collection; the core crate only transforms it.
//! Every mutation re-encodes the full collection and rewrites the slot,
//! which also resets its expiration window.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use perennial_core::ids::UuidGen;
use perennial_core::{Calendar, csv, store, token};

/// Load the calendar from the persisted slot.
///
/// A missing or expired slot means an empty calendar. A slot that fails
/// to decode is reported on stderr and treated the same way; in-memory
/// state never inherits a corrupt payload.
pub fn load() -> Result<Calendar> {
    let path = store::default_path()?;

    let Some(stored) = store::load(&path) else {
        return Ok(Calendar::new());
    };

    let text = match token::decode(&stored) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{}", format!("Ignoring stored events: {}", e).yellow());
            return Ok(Calendar::new());
        }
    };

    let mut ids = UuidGen;
    Ok(Calendar::from_events(csv::parse_events(&text, &mut ids)))
}

/// Re-encode the full collection and rewrite the slot.
pub fn persist(calendar: &Calendar) -> Result<()> {
    let path = store::default_path()?;
    let encoded = token::encode(&csv::generate_csv(calendar.events()));
    store::save(&path, &encoded).context("Failed to persist calendar")?;
    Ok(())
}
