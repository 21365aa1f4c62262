//! Start over with an empty calendar.

use anyhow::Result;
use owo_colors::OwoColorize;
use perennial_core::store;

pub fn run() -> Result<()> {
    let path = store::default_path()?;
    store::clear(&path)?;
    println!("{}", "Started a new calendar.".green());
    Ok(())
}
