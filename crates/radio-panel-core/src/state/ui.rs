use crate::panel::{SLIDER_MAX_X, SLIDER_MIN_X};

/// Tuner band selection.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Band {
    #[default]
    Am,
    Fm,
}

impl Band {
    #[inline]
    pub fn toggled(self) -> Band {
        match self {
            Band::Am => Band::Fm,
            Band::Fm => Band::Am,
        }
    }

    /// Display label rendered on the band indicator.
    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Band::Am => "AM",
            Band::Fm => "FM",
        }
    }
}

/// Process-wide interactive state, mutated once per frame by the input
/// model and read by the animation and render layers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiState {
    pub power_on: bool,
    pub band: Band,
    /// Slider position in [0, 1].
    pub slider_value: f32,
    pub slider_dragging: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vibration intensity parameter consumed by the pulse oscillator.
    /// Republished slider value; always in [0, 1].
    #[inline]
    pub fn vibration_intensity(&self) -> f32 {
        self.slider_value
    }

    /// Horizontal center of the slider handle, derived from the current
    /// value. The handle's hit box follows this as the value changes.
    #[inline]
    pub fn slider_handle_x(&self) -> f32 {
        SLIDER_MIN_X + self.slider_value * (SLIDER_MAX_X - SLIDER_MIN_X)
    }

    /// Recomputes the slider value from the pointer's horizontal position.
    ///
    /// Called every frame while the handle is being dragged; the vertical
    /// position is ignored once a drag has begun. The value is clamped to
    /// [0, 1] for pointer positions outside the track.
    pub fn drag_slider(&mut self, pointer_x: f32) {
        self.slider_value =
            ((pointer_x - SLIDER_MIN_X) / (SLIDER_MAX_X - SLIDER_MIN_X)).clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_toggles_between_am_and_fm() {
        assert_eq!(Band::Am.toggled(), Band::Fm);
        assert_eq!(Band::Fm.toggled(), Band::Am);
        assert_eq!(Band::Am.label(), "AM");
        assert_eq!(Band::Fm.label(), "FM");
    }

    #[test]
    fn drag_at_track_midpoint_yields_half() {
        // Track spans [-0.8, -0.4]; x = -0.6 is the midpoint.
        let mut ui = UiState::new();
        ui.drag_slider(-0.6);
        assert!((ui.slider_value - 0.5).abs() < 1e-6);
    }

    #[test]
    fn drag_clamps_for_arbitrary_pointer_positions() {
        let mut ui = UiState::new();
        for x in [-100.0, -0.81, 5.0, 1e6, f32::MIN, f32::MAX] {
            ui.drag_slider(x);
            assert!((0.0..=1.0).contains(&ui.slider_value), "x = {x}");
        }
    }

    #[test]
    fn drag_at_track_ends_yields_extremes() {
        let mut ui = UiState::new();
        ui.drag_slider(-0.8);
        assert_eq!(ui.slider_value, 0.0);
        ui.drag_slider(-0.4);
        assert_eq!(ui.slider_value, 1.0);
    }

    #[test]
    fn handle_position_tracks_value() {
        let mut ui = UiState::new();
        assert_eq!(ui.slider_handle_x(), -0.8);
        ui.slider_value = 1.0;
        assert_eq!(ui.slider_handle_x(), -0.4);
        ui.slider_value = 0.5;
        assert!((ui.slider_handle_x() + 0.6).abs() < 1e-6);
    }

    #[test]
    fn intensity_republishes_slider_value() {
        let mut ui = UiState::new();
        ui.drag_slider(-0.5);
        assert_eq!(ui.vibration_intensity(), ui.slider_value);
    }
}
