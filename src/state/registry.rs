//! Bounded, insertion-ordered collection of timers

use std::collections::BTreeMap;

use super::error::TimerError;
use super::timer::{Timer, TimerId, TimerKind};

/// Creation request for a single timer
#[derive(Debug, Clone)]
pub struct TimerSpec {
    pub kind: TimerKind,
    pub label: String,
    pub target_seconds: u64,
}

/// Owns every timer instance and enforces the concurrent-timer bound
///
/// Ids are assigned monotonically and never reused, so iterating the
/// underlying id-keyed map yields insertion order.
#[derive(Debug)]
pub struct TimerRegistry {
    timers: BTreeMap<TimerId, Timer>,
    next_id: TimerId,
    capacity: usize,
}

impl TimerRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            timers: BTreeMap::new(),
            next_id: 1,
            capacity,
        }
    }

    /// Create a timer in the Idle phase
    ///
    /// Rejected at the capacity bound with no side effect: no id is
    /// consumed and nothing is stored. An empty label defaults to
    /// `Timer #<id>`.
    pub fn create(&mut self, spec: TimerSpec) -> Result<&Timer, TimerError> {
        if self.timers.len() >= self.capacity {
            return Err(TimerError::CapacityExceeded(self.capacity));
        }
        let id = self.next_id;
        self.next_id += 1;
        let label = if spec.label.trim().is_empty() {
            format!("Timer #{}", id)
        } else {
            spec.label
        };
        let timer = Timer::new(id, spec.kind, label, spec.target_seconds);
        self.timers.insert(id, timer);
        Ok(&self.timers[&id])
    }

    /// Remove a timer; no-op when the id is absent
    pub fn remove(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    pub fn get(&self, id: TimerId) -> Option<&Timer> {
        self.timers.get(&id)
    }

    pub fn get_mut(&mut self, id: TimerId) -> Option<&mut Timer> {
        self.timers.get_mut(&id)
    }

    /// All timers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Timer> {
        self.timers.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Timer> {
        self.timers.values_mut()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(kind: TimerKind, label: &str, secs: u64) -> TimerSpec {
        TimerSpec {
            kind,
            label: label.to_string(),
            target_seconds: secs,
        }
    }

    #[test]
    fn ids_are_monotonic_and_never_reused() {
        let mut reg = TimerRegistry::new(10);
        let a = reg.create(spec(TimerKind::Countdown, "a", 60)).unwrap().id();
        let b = reg.create(spec(TimerKind::Stopwatch, "b", 0)).unwrap().id();
        assert_eq!((a, b), (1, 2));
        reg.remove(a);
        let c = reg.create(spec(TimerKind::Countdown, "c", 5)).unwrap().id();
        assert_eq!(c, 3);
    }

    #[test]
    fn enumeration_is_insertion_ordered() {
        let mut reg = TimerRegistry::new(10);
        for name in ["first", "second", "third"] {
            reg.create(spec(TimerKind::Stopwatch, name, 0)).unwrap();
        }
        let labels: Vec<_> = reg.iter().map(|t| t.label().to_string()).collect();
        assert_eq!(labels, ["first", "second", "third"]);
    }

    #[test]
    fn creation_beyond_the_bound_is_rejected_cleanly() {
        let mut reg = TimerRegistry::new(2);
        reg.create(spec(TimerKind::Countdown, "a", 1)).unwrap();
        reg.create(spec(TimerKind::Countdown, "b", 1)).unwrap();
        let err = reg.create(spec(TimerKind::Countdown, "c", 1)).unwrap_err();
        assert_eq!(err, TimerError::CapacityExceeded(2));
        assert_eq!(reg.len(), 2);
        // the rejected create consumed no id
        reg.remove(1);
        assert_eq!(
            reg.create(spec(TimerKind::Countdown, "d", 1)).unwrap().id(),
            3
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let mut reg = TimerRegistry::new(5);
        let id = reg.create(spec(TimerKind::Stopwatch, "s", 0)).unwrap().id();
        assert!(reg.remove(id));
        assert!(!reg.remove(id));
        assert!(!reg.remove(999));
        assert!(reg.is_empty());
    }

    #[test]
    fn empty_labels_get_a_default() {
        let mut reg = TimerRegistry::new(5);
        let id = reg.create(spec(TimerKind::Countdown, "  ", 30)).unwrap().id();
        assert_eq!(reg.get(id).unwrap().label(), "Timer #1");
    }
}
