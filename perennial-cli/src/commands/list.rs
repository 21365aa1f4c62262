//! List all events with their ids.

use anyhow::Result;

use crate::render;
use crate::state;

pub fn run() -> Result<()> {
    let calendar = state::load()?;

    if calendar.is_empty() {
        println!("No events yet. Add one with: perennial add <month> <day> <title>");
        return Ok(());
    }

    println!("{}", render::render_list(&calendar));
    Ok(())
}
