//! Event id generation.
//!
//! Parsing constructs events with fresh ids. The generator is passed in
//! explicitly so parse output is deterministic in tests instead of being
//! coupled to the wall clock.

use uuid::Uuid;

/// Source of unique event ids.
pub trait IdGen {
    fn next_id(&mut self) -> String;
}

/// Production id source backed by random UUIDs.
#[derive(Debug, Default)]
pub struct UuidGen;

impl IdGen for UuidGen {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-backed ids, for tests and tooling that want stable output.
#[derive(Debug, Default)]
pub struct SequentialGen(u64);

impl IdGen for SequentialGen {
    fn next_id(&mut self) -> String {
        self.0 += 1;
        format!("event-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_unique() {
        let mut ids = UuidGen;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn sequential_ids_are_stable() {
        let mut ids = SequentialGen::default();
        assert_eq!(ids.next_id(), "event-1");
        assert_eq!(ids.next_id(), "event-2");
    }
}
