//! Core types and transforms for the perennial ecosystem.
//!
//! This crate holds everything below the UI surface of a perennial
//! calendar:
//! - `Event` and `Calendar` for annually recurring entries
//! - `csv` for the tolerant interchange format (parse + generate)
//! - `token` for the transport-safe encoding shared by persistence
//!   and share links
//! - `store` for the single persisted slot with rolling expiration
//! - `month` for reference-year date arithmetic

pub mod calendar;
pub mod csv;
pub mod error;
pub mod event;
pub mod ids;
pub mod month;
pub mod store;
pub mod token;

pub use calendar::Calendar;
pub use error::{PerennialError, PerennialResult};
pub use event::Event;
