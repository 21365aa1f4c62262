//! Remove an event by id prefix.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::state;

pub fn run(id: &str) -> Result<()> {
    let mut calendar = state::load()?;

    let matches: Vec<String> = calendar
        .events()
        .iter()
        .filter(|e| e.id.starts_with(id))
        .map(|e| e.id.clone())
        .collect();

    match matches.as_slice() {
        [] => anyhow::bail!("No event with id '{}'", id),
        [full_id] => {
            let removed = calendar.remove(full_id);
            state::persist(&calendar)?;
            if let Some(event) = removed {
                println!("{}", format!("Removed: {}", event.title).green());
            }
            Ok(())
        }
        _ => anyhow::bail!(
            "Id '{}' is ambiguous ({} matches); use a longer prefix",
            id,
            matches.len()
        ),
    }
}
