//! Viewport transitions.
//!
//! The document stores pan and zoom verbatim; clamping is an interaction
//! concern and lives in the session layer. A zoom of 1.0 means one
//! centimeter maps to [`plankit_core::constants::PX_PER_CM`] pixels.

use super::AppState;

impl AppState {
    /// Replaces the viewport wholesale. Values are stored as given.
    pub fn set_viewport(&self, pan_x: f64, pan_y: f64, zoom: f64) -> AppState {
        let mut next = self.clone();
        next.pan_x = pan_x;
        next.pan_y = pan_y;
        next.zoom = zoom;
        next
    }
}
