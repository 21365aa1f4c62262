//! Canonical CSV generation for event collections.

use super::HEADER;
use crate::event::Event;

/// Serialize events to delimited text: the fixed header line, then one
/// `month,day,title` row per event in collection order.
///
/// Titles are written as-is with no quoting. A title containing the
/// delimiter still survives a round-trip through `parse_events` because
/// parsing rejoins all trailing fields back into the title.
pub fn generate_csv(events: &[Event]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for event in events {
        out.push_str(&format!("{},{},{}\n", event.month, event.day, event.title));
    }
    out
}
