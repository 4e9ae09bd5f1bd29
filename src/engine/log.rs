//! Bounded history of operation descriptions.

use std::collections::VecDeque;
use serde::{Serialize, Deserialize};

/// Entries kept when no capacity is configured.
pub const DEFAULT_LOG_CAPACITY: usize = 6;

/// The most recent descriptions, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LogSnapshot")]
pub struct OperationLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl OperationLog {
    /// An empty log holding up to [`DEFAULT_LOG_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// An empty log holding up to `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Add a description at the end, evicting the oldest past capacity.
    pub fn append(&mut self, description: impl Into<String>) {
        self.entries.push_back(description.into());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    /// Entries as an owned list, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Serialized form of a log, normalized on the way in.
#[derive(Deserialize)]
struct LogSnapshot {
    entries: VecDeque<String>,
    capacity: usize,
}

impl From<LogSnapshot> for OperationLog {
    fn from(snapshot: LogSnapshot) -> Self {
        let mut log = Self::with_capacity(snapshot.capacity);
        for entry in snapshot.entries {
            log.append(entry);
        }
        log
    }
}

impl Default for OperationLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let log = OperationLog::new();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), 6);
        assert_eq!(log.latest(), None);
    }

    #[test]
    fn test_keeps_last_six() {
        let mut log = OperationLog::new();
        for i in 0..10 {
            log.append(format!("entry {i}"));
        }

        assert_eq!(log.len(), 6);
        let expected: Vec<String> = (4..10).map(|i| format!("entry {i}")).collect();
        assert_eq!(log.entries(), expected);
        assert_eq!(log.latest(), Some("entry 9"));
    }

    #[test]
    fn test_under_capacity_keeps_order() {
        let mut log = OperationLog::new();
        log.append("a");
        log.append("b");
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_custom_capacity() {
        let mut log = OperationLog::with_capacity(2);
        log.append("a");
        log.append("b");
        log.append("c");
        assert_eq!(log.entries(), vec!["b".to_string(), "c".to_string()]);

        assert_eq!(OperationLog::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let mut log = OperationLog::with_capacity(3);
        log.append("a");
        log.append("b");

        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(serde_json::from_str::<OperationLog>(&json).unwrap(), log);
    }

    #[test]
    fn test_deserialize_enforces_capacity() {
        let json = r#"{"entries":["1","2","3","4","5","6","7","8"],"capacity":0}"#;
        let mut log: OperationLog = serde_json::from_str(json).unwrap();

        assert_eq!(log.capacity(), 1);
        assert_eq!(log.entries(), vec!["8".to_string()]);

        log.append("x");
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest(), Some("x"));

        let json = r#"{"entries":["1","2","3","4","5","6","7","8"],"capacity":6}"#;
        let log: OperationLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_clear() {
        let mut log = OperationLog::new();
        log.append("a");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), 6);
    }
}
