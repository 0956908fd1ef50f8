//! Snapshot-based undo/redo history.
//!
//! Because [`AppState`] transitions are pure, history is just three pieces:
//! the current snapshot, the stack of past snapshots and the queue of undone
//! ones. Recording a new snapshot discards the redo queue; undo and redo
//! shuffle whole states around without ever mutating one.

use plankit_core::constants::HISTORY_LIMIT;

use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct History {
    past: Vec<AppState>,
    present: AppState,
    future: Vec<AppState>,
    limit: usize,
}

impl History {
    /// Creates a history seeded with `initial` and the default depth limit.
    pub fn new(initial: AppState) -> Self {
        Self::with_limit(initial, HISTORY_LIMIT)
    }

    /// Creates a history with an explicit depth limit. A limit of zero keeps
    /// no past snapshots at all.
    pub fn with_limit(initial: AppState, limit: usize) -> Self {
        Self {
            past: Vec::new(),
            present: initial,
            future: Vec::new(),
            limit,
        }
    }

    pub fn present(&self) -> &AppState {
        &self.present
    }

    /// Records `next` as the new present, pushing the old present onto the
    /// undo stack and clearing any redo queue. The oldest past snapshot is
    /// dropped once the limit is exceeded.
    pub fn record(&mut self, next: AppState) {
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push(previous);
        self.future.clear();
        if self.past.len() > self.limit {
            self.past.remove(0);
        }
    }

    /// Swaps the present snapshot without touching the undo or redo stacks.
    /// Used for transient previews and for changes that should not be
    /// undoable on their own.
    pub fn replace(&mut self, next: AppState) {
        self.present = next;
    }

    /// Steps back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.past.pop() {
            Some(previous) => {
                let current = std::mem::replace(&mut self.present, previous);
                self.future.insert(0, current);
                true
            }
            None => false,
        }
    }

    /// Steps forward one snapshot. Returns false when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        if self.future.is_empty() {
            return false;
        }
        let next = self.future.remove(0);
        let current = std::mem::replace(&mut self.present, next);
        self.past.push(current);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.past.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.future.len()
    }

    /// Forgets all past and future snapshots, keeping only the present.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
