//! Viewport control and screen/plan coordinate mapping.
//!
//! Screen x = plan x in pixels * zoom + pan, and likewise for y. The
//! document stores whatever it was given; the clamps here only bound what
//! interactive gestures can produce.

use plankit_core::constants::{MAX_ZOOM, MIN_ZOOM};
use plankit_core::geometry::Point;
use plankit_core::units;

use super::PlannerState;

impl PlannerState {
    pub fn set_pan(&mut self, pan_x: f64, pan_y: f64) {
        let state = self.state();
        let next = state.set_viewport(pan_x, pan_y, state.zoom);
        self.apply(next);
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let pan_x = self.state().pan_x + dx;
        let pan_y = self.state().pan_y + dy;
        self.set_pan(pan_x, pan_y);
    }

    /// Sets the zoom, clamped to the interactive range, keeping the pan.
    pub fn set_zoom(&mut self, zoom: f64) {
        let state = self.state();
        let next = state.set_viewport(state.pan_x, state.pan_y, zoom.clamp(MIN_ZOOM, MAX_ZOOM));
        self.apply(next);
    }

    /// Multiplies the zoom by `factor` while keeping the plan point under
    /// the given screen position fixed, so wheel-zoom pivots on the cursor.
    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, factor: f64) {
        let state = self.state();
        let old_zoom = state.zoom;
        let new_zoom = (old_zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if new_zoom == old_zoom {
            return;
        }
        let anchor_x = (screen_x - state.pan_x) / old_zoom;
        let anchor_y = (screen_y - state.pan_y) / old_zoom;
        let next = state.set_viewport(
            screen_x - anchor_x * new_zoom,
            screen_y - anchor_y * new_zoom,
            new_zoom,
        );
        self.apply(next);
    }

    /// Converts a screen position to plan centimeters under the current
    /// viewport.
    pub fn screen_to_plan(&self, screen_x: f64, screen_y: f64) -> Point {
        let state = self.state();
        let x_px = (screen_x - state.pan_x) / state.zoom;
        let y_px = (screen_y - state.pan_y) / state.zoom;
        Point::new(units::to_cm(x_px), units::to_cm(y_px))
    }

    /// Converts a plan point in centimeters to its screen position.
    pub fn plan_to_screen(&self, p: Point) -> (f64, f64) {
        let state = self.state();
        (
            units::to_px(p.x) * state.zoom + state.pan_x,
            units::to_px(p.y) * state.zoom + state.pan_y,
        )
    }
}
