//! The annually recurring event type.

use serde::{Deserialize, Serialize};

/// A calendar entry that recurs on the same month and day every year.
///
/// Events are immutable once constructed; an edit is modeled as
/// remove + add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique id, generated at creation and never recomputed from
    /// content. Two events with identical fields stay distinct entities.
    pub id: String,
    /// Month number, 1-12.
    pub month: u32,
    /// Day of month, >= 1. Day-vs-month-length is the UI boundary's job,
    /// not the interchange layer's.
    pub day: u32,
    /// Non-empty title. May itself contain the field delimiter.
    pub title: String,
}

impl Event {
    /// Construct an event with an already-generated id.
    pub fn new(id: String, month: u32, day: u32, title: impl Into<String>) -> Self {
        Event {
            id,
            month,
            day,
            title: title.into(),
        }
    }
}
