//! Loading and saving plans from the session.

use std::path::Path;

use anyhow::Result;

use super::PlannerState;
use crate::history::History;
use crate::serialization;
use crate::state::AppState;

impl PlannerState {
    /// Serializes the current state to a JSON string, e.g. for browser
    /// storage or the clipboard.
    pub fn export_to_json(&self) -> plankit_core::Result<String> {
        serialization::export_json(self.state())
    }

    /// Replaces the open document with one parsed from JSON. The history
    /// restarts at the imported state and any drag is dropped.
    pub fn load_from_json(&mut self, json: &str) -> plankit_core::Result<()> {
        let state = serialization::import_json(json)?;
        self.reset_to(state);
        self.current_file_path = None;
        Ok(())
    }

    /// Writes the current state to `path` and marks the session clean.
    pub fn save_to_file(&mut self, path: &Path) -> Result<()> {
        serialization::save_to_file(self.state(), path)?;
        self.current_file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Loads a plan file, replacing the open document.
    pub fn load_from_file(&mut self, path: &Path) -> Result<()> {
        let state = serialization::load_from_file(path)?;
        self.reset_to(state);
        self.current_file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Discards the open document for a fresh empty plan.
    pub fn new_plan(&mut self) {
        self.reset_to(AppState::new());
        self.current_file_path = None;
    }

    /// Title-bar text: the file stem, or "Untitled", plus a dirty marker.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        if self.modified {
            format!("{} *", name)
        } else {
            name
        }
    }

    fn reset_to(&mut self, state: AppState) {
        self.history = History::new(state);
        self.room_drag = None;
        self.object_drag = None;
        self.modified = false;
    }
}
