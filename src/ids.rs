use chrono::{DateTime, Local};
use uuid::Uuid;

/// Source of workout ids. Must not repeat within a session.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random version-4 UUIDs, e.g. `3f2b8c1e-9a4d-4c7e-b0a1-5d6e7f8a9b0c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}

/// Deterministic `<prefix>-<n>` ids, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Number of ids handed out so far.
    pub const fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("w")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn random_ids_are_v4_and_distinct() {
        let mut ids = RandomIds;
        let seen: HashSet<String> = (0..500).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 500);

        for id in &seen {
            let parsed = Uuid::parse_str(id).unwrap();
            assert_eq!(parsed.get_version_num(), 4);
            assert_eq!(id.len(), 36);
        }
    }

    #[test]
    fn sequential_ids_count_from_one() {
        let mut ids = SequentialIds::new("run");
        assert_eq!(ids.issued(), 0);
        assert_eq!(ids.next_id(), "run-1");
        assert_eq!(ids.next_id(), "run-2");
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn fixed_clock_does_not_move() {
        let t = Local.with_ymd_and_hms(2026, 4, 14, 7, 30, 0).unwrap();
        let clock = FixedClock(t);
        assert_eq!(clock.now(), t);
        assert_eq!(clock.now(), t);
    }
}
