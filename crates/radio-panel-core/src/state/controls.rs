use crate::coords::{HitRegion, NdcPoint};
use crate::panel::{
    BAND_REGION, POWER_REGION, SLIDER_GRAB_HALF_H, SLIDER_GRAB_HALF_W, SLIDER_Y,
};

use super::ui::UiState;

/// An interactive region on the panel.
///
/// New widgets are added by registering a region + press handler pair with
/// [`ControlSet`] instead of writing another free-standing callback.
pub trait Control {
    /// Hit region in NDC space. May depend on the current state (the
    /// slider's grab box follows its handle).
    fn region(&self, ui: &UiState) -> HitRegion;

    /// Invoked on a press edge whose pointer lies inside [`region`].
    fn on_press(&self, ui: &mut UiState);

    /// Invoked on every release edge, regardless of pointer position.
    fn on_release(&self, _ui: &mut UiState) {}
}

/// Power switch: a fixed region; each press inside flips the power state.
/// No press-and-hold behavior.
pub struct PowerSwitch;

impl Control for PowerSwitch {
    fn region(&self, _ui: &UiState) -> HitRegion {
        POWER_REGION
    }

    fn on_press(&self, ui: &mut UiState) {
        ui.power_on = !ui.power_on;
        log::debug!("power switch pressed: power_on = {}", ui.power_on);
    }
}

/// AM/FM toggle: same edge-check pattern against its own fixed region.
pub struct BandToggle;

impl Control for BandToggle {
    fn region(&self, _ui: &UiState) -> HitRegion {
        BAND_REGION
    }

    fn on_press(&self, ui: &mut UiState) {
        ui.band = ui.band.toggled();
        log::debug!("band toggle pressed: band = {}", ui.band.label());
    }
}

/// Slider handle: a two-state drag machine.
///
/// Idle → Dragging on a press within the tolerance box centered on the
/// current handle position; Dragging → Idle unconditionally on release.
/// The tolerance box is deliberately wider than the drawn handle.
pub struct SliderHandle;

impl Control for SliderHandle {
    fn region(&self, ui: &UiState) -> HitRegion {
        HitRegion::centered(
            ui.slider_handle_x(),
            SLIDER_Y,
            SLIDER_GRAB_HALF_W,
            SLIDER_GRAB_HALF_H,
        )
    }

    fn on_press(&self, ui: &mut UiState) {
        ui.slider_dragging = true;
        log::debug!("slider grab at value {:.3}", ui.slider_value);
    }

    fn on_release(&self, ui: &mut UiState) {
        ui.slider_dragging = false;
    }
}

/// The registered set of panel controls, dispatching pointer edges.
pub struct ControlSet {
    controls: Vec<Box<dyn Control>>,
}

impl ControlSet {
    /// The shipped panel layout: power switch, band toggle, slider handle.
    pub fn panel() -> Self {
        Self {
            controls: vec![
                Box::new(PowerSwitch),
                Box::new(BandToggle),
                Box::new(SliderHandle),
            ],
        }
    }

    /// Dispatches a press edge at `p` to every control whose region
    /// contains the point. A press outside all regions changes nothing.
    pub fn press(&self, ui: &mut UiState, p: NdcPoint) {
        for control in &self.controls {
            if control.region(ui).contains(p) {
                control.on_press(ui);
            }
        }
    }

    /// Dispatches a release edge to every control.
    pub fn release(&self, ui: &mut UiState) {
        for control in &self.controls {
            control.on_release(ui);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Band;

    fn press(ui: &mut UiState, x: f32, y: f32) {
        ControlSet::panel().press(ui, NdcPoint::new(x, y));
    }

    // ── misses ────────────────────────────────────────────────────────────

    #[test]
    fn press_outside_every_region_changes_nothing() {
        let mut ui = UiState::new();
        let before = ui;
        for (x, y) in [(0.9, 0.9), (-0.9, -0.1), (0.0, 0.0), (0.5, -0.7), (0.0, 0.7)] {
            press(&mut ui, x, y);
        }
        assert_eq!(ui.power_on, before.power_on);
        assert_eq!(ui.band, before.band);
        assert_eq!(ui.slider_value, before.slider_value);
        assert!(!ui.slider_dragging);
    }

    // ── power switch ──────────────────────────────────────────────────────

    #[test]
    fn power_presses_alternate_state() {
        let mut ui = UiState::new();
        for expected in [true, false, true, false] {
            press(&mut ui, 0.0, -0.6);
            assert_eq!(ui.power_on, expected);
        }
    }

    #[test]
    fn power_region_edges_are_inclusive() {
        let mut ui = UiState::new();
        press(&mut ui, -0.15, -0.7);
        assert!(ui.power_on);
        press(&mut ui, 0.15, -0.5);
        assert!(!ui.power_on);
    }

    // ── band toggle ───────────────────────────────────────────────────────

    #[test]
    fn band_press_flips_between_am_and_fm() {
        let mut ui = UiState::new();
        press(&mut ui, 0.0, 0.4);
        assert_eq!(ui.band, Band::Fm);
        press(&mut ui, 0.0, 0.4);
        assert_eq!(ui.band, Band::Am);
    }

    // ── slider ────────────────────────────────────────────────────────────

    #[test]
    fn slider_grab_begins_drag_only_near_handle() {
        let mut ui = UiState::new();

        // Value 0 puts the handle at x = -0.8.
        press(&mut ui, -0.8, -0.7);
        assert!(ui.slider_dragging);

        ui.slider_dragging = false;

        // Far end of the track is outside the grab box at value 0.
        press(&mut ui, -0.4, -0.7);
        assert!(!ui.slider_dragging);
    }

    #[test]
    fn slider_grab_box_follows_the_handle() {
        let mut ui = UiState::new();
        ui.slider_value = 1.0; // handle at x = -0.4

        press(&mut ui, -0.42, -0.68);
        assert!(ui.slider_dragging);
    }

    #[test]
    fn release_always_ends_the_drag() {
        let mut ui = UiState::new();
        ui.slider_dragging = true;

        // Release with the pointer nowhere near the slider.
        ControlSet::panel().release(&mut ui);
        assert!(!ui.slider_dragging);
    }

    #[test]
    fn drag_sequence_updates_value_from_x_only() {
        let mut ui = UiState::new();
        press(&mut ui, -0.8, -0.7);
        assert!(ui.slider_dragging);

        // Vertical position is ignored once dragging.
        ui.drag_slider(-0.6);
        assert!((ui.slider_value - 0.5).abs() < 1e-6);
        ui.drag_slider(2.0);
        assert_eq!(ui.slider_value, 1.0);
    }
}
