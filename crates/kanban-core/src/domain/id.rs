//! Identifiers
//!
//! Board and task ids are numbers, column ids are `"<boardId>-<n>"` strings.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque entity identifier, stored as a bare JSON number or string
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(u32),
    Text(String),
}

impl Id {
    /// Build a column id owned by `board`
    pub fn composite(board: &Id, n: u32) -> Self {
        Id::Text(format!("{}-{}", board, n))
    }

    /// Parse a textual id, preferring the numeric form
    pub fn parse(s: &str) -> Self {
        match s.parse::<u32>() {
            Ok(n) => Id::Num(n),
            Err(_) => Id::Text(s.to_string()),
        }
    }

    /// Split a composite id into its owner prefix and numeric suffix
    ///
    /// The split happens at the last `-`, so owners that contain dashes
    /// themselves still round-trip.
    pub fn split_owner(&self) -> Option<(Id, Option<u32>)> {
        match self {
            Id::Num(_) => None,
            Id::Text(s) => {
                let (owner, suffix) = s.rsplit_once('-')?;
                if owner.is_empty() {
                    return None;
                }
                Some((Id::parse(owner), suffix.parse().ok()))
            }
        }
    }

    /// The number this id contributes to the generator, if any
    fn ordinal(&self) -> Option<u32> {
        match self {
            Id::Num(n) => Some(*n),
            Id::Text(_) => self.split_owner().and_then(|(_, n)| n),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Num(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<u32> for Id {
    fn from(n: u32) -> Self {
        Id::Num(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Id::Text(s.to_string())
    }
}

/// Exclusive upper bound of generated numbers
pub const ID_UPPER_BOUND: u32 = u32::MAX;

/// Monotonic identifier source
///
/// Every id loaded from storage is fed to [`IdGenerator::observe`], after
/// which [`IdGenerator::next_id`] only hands out numbers that were never seen
/// in this session.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u32,
    seen: HashSet<u32>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1, seen: HashSet::new() }
    }

    /// Record an existing id so it is never issued again
    pub fn observe(&mut self, id: &Id) {
        if let Some(n) = id.ordinal() {
            self.seen.insert(n);
            if n >= self.next && n < ID_UPPER_BOUND - 1 {
                self.next = n + 1;
            }
        }
    }

    pub fn observe_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a Id>) {
        for id in ids {
            self.observe(id);
        }
    }

    /// Hand out the next unused number
    pub fn next_id(&mut self) -> u32 {
        loop {
            let candidate = self.next;
            self.next = if candidate + 1 >= ID_UPPER_BOUND { 0 } else { candidate + 1 };
            if self.seen.insert(candidate) {
                return candidate;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_json_forms() {
        let ids: Vec<Id> = serde_json::from_str(r#"[7, "7-12", "abc"]"#).unwrap();
        assert_eq!(ids, vec![Id::Num(7), Id::Text("7-12".into()), Id::Text("abc".into())]);
        assert_eq!(serde_json::to_string(&ids).unwrap(), r#"[7,"7-12","abc"]"#);
    }

    #[test]
    fn test_composite_and_split() {
        let col = Id::composite(&Id::Num(42), 9);
        assert_eq!(col, Id::Text("42-9".into()));
        assert_eq!(col.split_owner(), Some((Id::Num(42), Some(9))));
        assert_eq!(Id::Num(3).split_owner(), None);
        assert_eq!(Id::from("nodash").split_owner(), None);
        assert_eq!(Id::from("-5").split_owner(), None);
    }

    #[test]
    fn test_generator_starts_at_one() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.next_id(), 2);
    }

    #[test]
    fn test_generator_skips_observed() {
        let mut ids = IdGenerator::new();
        ids.observe(&Id::Num(10));
        ids.observe(&Id::from("10-25"));
        assert_eq!(ids.next_id(), 26);
    }

    #[test]
    fn test_generator_wraps_without_collision() {
        let mut ids = IdGenerator::new();
        ids.observe(&Id::Num(0));
        ids.next = ID_UPPER_BOUND - 1;
        // Wraps past the bound and skips the observed 0
        assert_eq!(ids.next_id(), ID_UPPER_BOUND - 1);
        assert_eq!(ids.next_id(), 1);
    }
}
