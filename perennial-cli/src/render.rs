//! Terminal rendering for month grids and event lists.

use owo_colors::OwoColorize;
use perennial_core::month::{REFERENCE_YEAR, days_in_month, first_weekday_of_month, month_name};
use perennial_core::{Calendar, Event};

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Render a month grid, offset so day 1 falls under its weekday column.
/// Days with events are highlighted and listed below the grid.
pub fn render_month(calendar: &Calendar, month: u32) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "  {} {}",
        month_name(month).bold(),
        REFERENCE_YEAR.dimmed()
    ));
    lines.push(
        DAY_LABELS
            .iter()
            .map(|label| format!(" {}", label))
            .collect::<String>(),
    );

    let offset = first_weekday_of_month(month);
    let days = days_in_month(month);

    let mut row = " ".repeat(4 * offset as usize);
    for day in 1..=days {
        let cell = format!("{:>3}", day);
        if calendar.events_on(month, day).is_empty() {
            row.push_str(&format!(" {}", cell));
        } else {
            row.push_str(&format!(" {}", cell.green().bold()));
        }

        if (offset + day) % 7 == 0 {
            lines.push(std::mem::take(&mut row));
        }
    }
    if !row.trim().is_empty() {
        lines.push(row);
    }

    let mut in_month: Vec<&Event> = calendar.events().iter().filter(|e| e.month == month).collect();
    if !in_month.is_empty() {
        lines.push(String::new());
        in_month.sort_by_key(|e| e.day);
        for event in in_month {
            let day = format!("{:>2}", event.day);
            lines.push(format!("  {}  {}", day.green(), event.title));
        }
    }

    lines.join("\n")
}

/// Render every event as one row: short id, date, title.
pub fn render_list(calendar: &Calendar) -> String {
    calendar
        .events()
        .iter()
        .map(|event| {
            format!(
                "  {}  {:>2}/{:<2}  {}",
                short_id(&event.id).dimmed(),
                event.month,
                event.day,
                event.title
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Short version of an event id for display.
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

/// Simple pluralization helper.
pub fn pluralize(word: &str, count: usize) -> &str {
    if count == 1 {
        word
    } else {
        match word {
            "event" => "events",
            _ => word,
        }
    }
}
