//! Snapshot-based undo/redo over a scene sequence.
//!
//! History is linear: pushing a new snapshot while the cursor sits behind the
//! last entry discards the redo branch. Entries are independent owned copies,
//! so restoring an old snapshot never aliases the live sequence.

use super::model::Scene;

/// Maximum number of retained snapshots. Pushing past the bound evicts the
/// oldest entry and shifts the cursor to compensate.
pub const MAX_HISTORY_SIZE: usize = 50;

/// Ordered snapshot list plus a cursor into it.
///
/// The history is seeded with the initial sequence, so `entries[0]` is the
/// pre-mutation baseline: undoing as many times as there were mutations
/// restores the state before any of them (until the baseline is evicted by
/// the size bound).
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Vec<Scene>>,
    cursor: usize,
}

impl History {
    /// Creates a history seeded with the initial sequence as its baseline.
    pub fn new(initial: Vec<Scene>) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Commits a snapshot: truncates the redo branch, appends, advances the
    /// cursor, and evicts the oldest entry when the bound is exceeded.
    pub fn push(&mut self, sequence: Vec<Scene>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(sequence);
        self.cursor += 1;
        if self.entries.len() > MAX_HISTORY_SIZE {
            self.entries.remove(0);
            self.cursor -= 1;
        }
    }

    /// Steps the cursor back and returns the snapshot to restore, or `None`
    /// at the oldest entry.
    pub fn undo(&mut self) -> Option<&[Scene]> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.entries[self.cursor])
    }

    /// Steps the cursor forward and returns the snapshot to restore, or
    /// `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&[Scene]> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.entries[self.cursor])
    }

    /// True when an undo step is available.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True when a redo step is available.
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of retained snapshots (baseline included).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the baseline entry is never evicted below one.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::model::Scene;

    fn seq(n: usize) -> Vec<Scene> {
        (0..n).map(|_| Scene::new()).collect()
    }

    #[test]
    fn test_undo_is_noop_at_baseline() {
        let mut history = History::new(Vec::new());
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = History::new(Vec::new());
        let states: Vec<Vec<Scene>> = (1..=5).map(seq).collect();
        for state in &states {
            history.push(state.clone());
        }

        for _ in 0..5 {
            assert!(history.undo().is_some());
        }
        assert!(!history.can_undo());
        assert_eq!(history.cursor(), 0);

        for (i, state) in states.iter().enumerate() {
            let restored = history.redo().expect("redo available");
            assert_eq!(restored.len(), state.len(), "redo step {}", i);
        }
        assert!(!history.can_redo());
    }

    #[test]
    fn test_push_discards_redo_branch() {
        let mut history = History::new(Vec::new());
        history.push(seq(1));
        history.push(seq(2));
        history.undo();
        assert!(history.can_redo());

        history.push(seq(3));
        assert!(!history.can_redo());
        // baseline + 1-scene + 3-scene
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_bound_evicts_oldest_and_keeps_cursor_valid() {
        let mut history = History::new(Vec::new());
        for i in 1..=60 {
            history.push(seq(i));
        }
        assert_eq!(history.len(), MAX_HISTORY_SIZE);
        assert_eq!(history.cursor(), MAX_HISTORY_SIZE - 1);

        // The newest snapshot is still the one pushed last.
        let restored = history.undo().expect("undo available");
        assert_eq!(restored.len(), 59);
    }
}
