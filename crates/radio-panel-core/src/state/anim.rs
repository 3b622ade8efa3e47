use std::f32::consts::PI;

use crate::coords::Color;

/// Per-frame phase step of the pulse oscillator, in radians.
///
/// The step is a fixed per-frame amount, not scaled by measured elapsed
/// time: the simulation assumes the 60 Hz loop the frame pacer maintains,
/// so pulse speed tracks the achieved frame rate. Intentional
/// simplification, kept as-is.
const PULSE_STEP: f32 = 0.7;

/// Per-frame time increment fed to the blink timer, in seconds.
/// Same fixed-cadence assumption as [`PULSE_STEP`].
const BLINK_STEP: f32 = 0.016;

/// Interval between blink color flips, in accumulated seconds.
const BLINK_INTERVAL: f32 = 0.3;

const BLINK_WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
const BLINK_AMBER: Color = Color::rgb(1.0, 0.5, 0.0);
const BLINK_OFF_GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

/// Pulsing-scale oscillator driving the speaker vibration effect.
///
/// While powered the phase advances monotonically and wraps modulo 2π;
/// cutting power snaps the phase back to zero (a hard reset, not a decay).
#[derive(Debug, Default, Clone, Copy)]
pub struct Pulse {
    phase: f32,
}

impl Pulse {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advances the oscillator by one frame.
    pub fn advance(&mut self, power_on: bool) {
        if power_on {
            self.phase += PULSE_STEP;
            if self.phase > 2.0 * PI {
                self.phase -= 2.0 * PI;
            }
        } else {
            self.phase = 0.0;
        }
    }

    /// Multiplicative size factor for the speaker circles.
    ///
    /// Exactly 1.0 while unpowered, regardless of phase or intensity.
    pub fn scale(&self, power_on: bool, intensity: f32) -> f32 {
        if power_on {
            1.0 + self.phase.sin() * intensity
        } else {
            1.0
        }
    }
}

/// Blink-color oscillator driving the indicator light.
///
/// Powered: the timer accumulates and the white/amber flag flips every
/// [`BLINK_INTERVAL`]. Unpowered: the light shows a fixed mid-gray and the
/// timer and flag are left untouched — a freeze, not a reset. This is
/// asymmetric with [`Pulse`] on purpose; re-powering resumes from the last
/// flag value.
#[derive(Debug, Clone, Copy)]
pub struct Blink {
    timer: f32,
    is_white: bool,
}

impl Default for Blink {
    fn default() -> Self {
        Self { timer: 0.0, is_white: true }
    }
}

impl Blink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the blink timer by one frame. No-op while unpowered.
    pub fn advance(&mut self, power_on: bool) {
        if !power_on {
            return;
        }

        self.timer += BLINK_STEP;
        if self.timer >= BLINK_INTERVAL {
            self.timer = 0.0;
            self.is_white = !self.is_white;
        }
    }

    /// Current light color.
    pub fn color(&self, power_on: bool) -> Color {
        if !power_on {
            BLINK_OFF_GRAY
        } else if self.is_white {
            BLINK_WHITE
        } else {
            BLINK_AMBER
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Frames per blink flip at the fixed per-frame step: 0.3 / 0.016 → the
    // 19th accumulation crosses the interval.
    const FRAMES_PER_FLIP: usize = 19;

    // ── pulse ─────────────────────────────────────────────────────────────

    #[test]
    fn pulse_stays_zero_while_unpowered() {
        let mut p = Pulse::new();
        for _ in 0..100 {
            p.advance(false);
            assert_eq!(p.phase(), 0.0);
            assert_eq!(p.scale(false, 1.0), 1.0);
        }
    }

    #[test]
    fn pulse_resets_to_zero_on_power_off() {
        let mut p = Pulse::new();
        for _ in 0..5 {
            p.advance(true);
        }
        assert!(p.phase() > 0.0);

        p.advance(false);
        assert_eq!(p.phase(), 0.0);
        assert_eq!(p.scale(false, 0.8), 1.0);
    }

    #[test]
    fn pulse_phase_wraps_below_two_pi() {
        let mut p = Pulse::new();
        for _ in 0..1000 {
            p.advance(true);
            assert!(p.phase() <= 2.0 * PI + PULSE_STEP);
            assert!(p.phase() >= 0.0);
        }
    }

    #[test]
    fn pulse_scale_follows_sine_while_powered() {
        let mut p = Pulse::new();
        p.advance(true); // phase = 0.7
        let expected = 1.0 + 0.7f32.sin() * 0.5;
        assert!((p.scale(true, 0.5) - expected).abs() < 1e-6);
    }

    #[test]
    fn zero_intensity_pins_scale_to_one() {
        let mut p = Pulse::new();
        for _ in 0..7 {
            p.advance(true);
            assert_eq!(p.scale(true, 0.0), 1.0);
        }
    }

    // ── blink ─────────────────────────────────────────────────────────────

    #[test]
    fn blink_starts_white() {
        let b = Blink::new();
        assert_eq!(b.color(true), BLINK_WHITE);
    }

    #[test]
    fn blink_alternates_every_interval() {
        let mut b = Blink::new();

        for _ in 0..FRAMES_PER_FLIP {
            b.advance(true);
        }
        assert_eq!(b.color(true), BLINK_AMBER);

        for _ in 0..FRAMES_PER_FLIP {
            b.advance(true);
        }
        assert_eq!(b.color(true), BLINK_WHITE);
    }

    #[test]
    fn blink_shows_gray_while_unpowered() {
        let mut b = Blink::new();
        b.advance(false);
        assert_eq!(b.color(false), BLINK_OFF_GRAY);
    }

    #[test]
    fn blink_freezes_rather_than_resets_on_power_off() {
        let mut b = Blink::new();
        for _ in 0..FRAMES_PER_FLIP {
            b.advance(true);
        }
        assert_eq!(b.color(true), BLINK_AMBER);

        // Power off: gray immediately, but the flag is untouched.
        for _ in 0..50 {
            b.advance(false);
        }
        assert_eq!(b.color(false), BLINK_OFF_GRAY);

        // Power back on: resumes from the last flag, not from the start.
        assert_eq!(b.color(true), BLINK_AMBER);
    }
}
