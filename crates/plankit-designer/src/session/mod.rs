//! Interactive editing session on top of the pure state.
//!
//! [`PlannerState`] is what a frontend holds: the undo history, the active
//! drag (if any) and file bookkeeping. Everything it does funnels through
//! the pure transitions on [`AppState`]; this layer only decides which
//! results become undo steps and which are applied silently.
//!
//! Structural edits go through [`PlannerState::commit`] and are undoable.
//! Selection and viewport changes go through [`PlannerState::apply`]: they
//! update the document but are not worth an undo step of their own, which
//! matches how users expect undo to behave in a plan editor.

mod drag;
mod file_io;
mod history;
mod objects;
mod openings;
mod rooms;
mod selection;
mod viewport;

use std::path::{Path, PathBuf};

use crate::history::History;
use crate::state::AppState;

/// One open plan document plus the interaction state around it.
#[derive(Debug)]
pub struct PlannerState {
    history: History,
    room_drag: Option<drag::RoomDrag>,
    object_drag: Option<drag::ObjectDrag>,
    current_file_path: Option<PathBuf>,
    modified: bool,
}

impl PlannerState {
    /// A session holding an empty plan.
    pub fn new() -> Self {
        Self::with_state(AppState::new())
    }

    /// A session holding an existing state, e.g. one restored from storage.
    pub fn with_state(state: AppState) -> Self {
        Self {
            history: History::new(state),
            room_drag: None,
            object_drag: None,
            current_file_path: None,
            modified: false,
        }
    }

    /// The current document state. During a drag this is the live preview.
    pub fn state(&self) -> &AppState {
        self.history.present()
    }

    /// True when the document has unsaved structural changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn current_file_path(&self) -> Option<&Path> {
        self.current_file_path.as_deref()
    }

    /// Records `next` as an undoable step. States equal to the present are
    /// dropped so rejected transitions never pollute the history.
    fn commit(&mut self, next: AppState) {
        if next != *self.history.present() {
            self.history.record(next);
            self.modified = true;
        }
    }

    /// Applies `next` without recording an undo step.
    fn apply(&mut self, next: AppState) {
        self.history.replace(next);
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}
