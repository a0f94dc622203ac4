use std::collections::VecDeque;

use scope_core::{HistoryEntry, Result, ScopeError, Statistics};

/// Bounded FIFO window of recent `(time, usage)` samples.
///
/// Appending at capacity evicts the oldest entry first; insertion order is
/// chronological order (monotonic timestamps are expected from the caller,
/// not enforced). Owned exclusively by the sampling monitor.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest if at capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Read-only view, oldest first / most recent last.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The `n` most recent entries, oldest of them first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    /// Mean/min/max over the window.
    ///
    /// An empty window is an error — reporting zeros for "no data" would be
    /// indistinguishable from an idle machine.
    pub fn statistics(&self) -> Result<Statistics> {
        if self.entries.is_empty() {
            return Err(ScopeError::EmptyHistory);
        }

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0_f32;
        for entry in &self.entries {
            min = min.min(entry.usage);
            max = max.max(entry.usage);
            sum += entry.usage;
        }

        Ok(Statistics {
            mean: sum / self.entries.len() as f32,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn entry(usage: f32) -> HistoryEntry {
        HistoryEntry {
            time: Local::now(),
            usage,
        }
    }

    #[test]
    fn push_below_capacity_keeps_everything() {
        let mut buf = HistoryBuffer::new(5);
        for i in 0..3 {
            buf.push(entry(i as f32));
        }
        assert_eq!(buf.len(), 3);
        let usages: Vec<f32> = buf.iter().map(|e| e.usage).collect();
        assert_eq!(usages, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn overflow_evicts_oldest_in_fifo_order() {
        let mut buf = HistoryBuffer::new(3);
        for i in 0..10 {
            buf.push(entry(i as f32));
        }
        assert_eq!(buf.len(), 3);
        let usages: Vec<f32> = buf.iter().map(|e| e.usage).collect();
        // Last `capacity` appended entries, original order preserved.
        assert_eq!(usages, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn statistics_over_known_values() {
        let mut buf = HistoryBuffer::new(60);
        for usage in [10.0, 20.0, 30.0] {
            buf.push(entry(usage));
        }
        let stats = buf.statistics().unwrap();
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 30.0);
    }

    #[test]
    fn statistics_on_empty_buffer_is_an_error() {
        let buf = HistoryBuffer::new(60);
        assert!(matches!(buf.statistics(), Err(ScopeError::EmptyHistory)));
    }

    #[test]
    fn recent_returns_tail_in_order() {
        let mut buf = HistoryBuffer::new(10);
        for i in 0..6 {
            buf.push(entry(i as f32));
        }
        let tail: Vec<f32> = buf.recent(3).map(|e| e.usage).collect();
        assert_eq!(tail, vec![3.0, 4.0, 5.0]);

        // Asking for more than is stored yields everything.
        assert_eq!(buf.recent(100).count(), 6);
    }

    #[test]
    fn zero_capacity_is_clamped_to_one() {
        let mut buf = HistoryBuffer::new(0);
        buf.push(entry(1.0));
        buf.push(entry(2.0));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.iter().next().unwrap().usage, 2.0);
    }
}
