//! Undo/redo surface of the session.
//!
//! An active drag is abandoned before stepping, since its preview was never
//! recorded and would otherwise be stranded between snapshots.

use super::PlannerState;

impl PlannerState {
    /// Steps back one recorded edit. Returns false when at the beginning.
    pub fn undo(&mut self) -> bool {
        self.cancel_drags();
        let undone = self.history.undo();
        if undone {
            self.modified = true;
        }
        undone
    }

    /// Steps forward one undone edit. Returns false when at the end.
    pub fn redo(&mut self) -> bool {
        self.cancel_drags();
        let redone = self.history.redo();
        if redone {
            self.modified = true;
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }
}
