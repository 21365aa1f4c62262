//! CSV interchange for event collections.
//!
//! Parsing is deliberately forgiving: the input may be a hand-edited
//! file, a legacy export, or third-party CSV with inconsistent quoting,
//! so the contract is best-effort extraction rather than strict schema
//! conformance. Generation is the opposite: one canonical header, one
//! unquoted row per event.

mod generate;
mod parse;

pub use generate::generate_csv;
pub use parse::parse_events;

/// Canonical header emitted on export.
pub(crate) const HEADER: &str = "month,day,title";

/// Fixed filename for exported calendars.
pub const EXPORT_FILENAME: &str = "calendar.csv";
