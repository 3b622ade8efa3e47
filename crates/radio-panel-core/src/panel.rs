//! The fixed panel composition.
//!
//! Layout constants for every element (also consumed by the hit-test
//! model) and [`record_panel`], which pushes the frame's draw commands in
//! the panel's fixed paint order.

use crate::coords::{Color, HitRegion, NdcPoint};
use crate::scene::{DrawList, ZIndex};
use crate::state::UiState;

// ── hit regions ───────────────────────────────────────────────────────────

/// Power switch hit region (matches the drawn power indicator rect).
pub const POWER_REGION: HitRegion = HitRegion::centered(0.0, -0.6, 0.15, 0.1);

/// AM/FM toggle hit region (matches the drawn band panel).
pub const BAND_REGION: HitRegion = HitRegion::centered(0.0, 0.4, 0.1, 0.1);

// ── slider ────────────────────────────────────────────────────────────────

pub const SLIDER_MIN_X: f32 = -0.8;
pub const SLIDER_MAX_X: f32 = -0.4;
pub const SLIDER_Y: f32 = -0.7;

/// Grab-box half extents around the handle center. Wider than the drawn
/// handle so the thumb is easy to pick up.
pub const SLIDER_GRAB_HALF_W: f32 = 0.05;
pub const SLIDER_GRAB_HALF_H: f32 = 0.075;

const SLIDER_TRACK_HEIGHT: f32 = 0.05;
const SLIDER_HANDLE_SIZE: NdcPoint = NdcPoint::new(0.05, 0.15);

// ── layout ────────────────────────────────────────────────────────────────

const BACKGROUND_SIZE: NdcPoint = NdcPoint::new(1.8, 1.6);

const SPEAKER_X: f32 = 0.6;
const SPEAKER_ENCLOSURE_SIZE: NdcPoint = NdcPoint::new(0.45, 0.55);
/// Base scale of the speaker circle before the pulsing factor.
const SPEAKER_CIRCLE_SCALE: f32 = 0.8;

const LIGHT_CENTER: NdcPoint = NdcPoint::new(0.0, 0.6);
const LIGHT_SCALE: f32 = 0.17;

const BAND_PANEL_SIZE: NdcPoint = NdcPoint::new(0.2, 0.2);
const BAND_TEXT_ORIGIN: NdcPoint = NdcPoint::new(-0.05, 0.42);
const BAND_TEXT_SCALE: f32 = 0.0015;

const POWER_RECT_SIZE: NdcPoint = NdcPoint::new(0.3, 0.2);

const WATERMARK: &str = "radio-panel 0.1";
const WATERMARK_ORIGIN: NdcPoint = NdcPoint::new(-0.9, 0.83);
const WATERMARK_SCALE: f32 = 0.002;

// ── colors ────────────────────────────────────────────────────────────────

const BACKGROUND_BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
const TRACK_GRAY: Color = Color::gray(0.7);
const ENCLOSURE_GRAY: Color = Color::gray(0.3);
const GRID_GRAY: Color = Color::gray(0.5);
const BAND_PANEL_GRAY: Color = Color::gray(0.2);
/// Power indicator polarity is intentional: off = green (safe),
/// on = red (active).
const POWER_OFF_GREEN: Color = Color::rgb(0.0, 0.8, 0.0);
const POWER_ON_RED: Color = Color::rgb(0.8, 0.0, 0.0);

// ── z layers ──────────────────────────────────────────────────────────────

const Z_BACKGROUND: ZIndex = ZIndex::new(0);
const Z_WIDGETS: ZIndex = ZIndex::new(10);
const Z_LABELS: ZIndex = ZIndex::new(20);

/// Records one frame of the panel into `list`, in the panel's fixed paint
/// order: background, slider (track then handle), left and right speakers
/// (enclosure, pulsing circle, grid), indicator light, band panel + label,
/// power indicator, watermark.
pub fn record_panel(
    ui: &UiState,
    pulsing_scale: f32,
    light_color: Color,
    list: &mut DrawList,
) {
    list.push_rect(Z_BACKGROUND, NdcPoint::zero(), BACKGROUND_SIZE, BACKGROUND_BLUE);

    // Slider: track first, handle always on top of it.
    list.push_rect(
        Z_WIDGETS,
        NdcPoint::new((SLIDER_MIN_X + SLIDER_MAX_X) / 2.0, SLIDER_Y),
        NdcPoint::new(SLIDER_MAX_X - SLIDER_MIN_X, SLIDER_TRACK_HEIGHT),
        TRACK_GRAY,
    );
    list.push_rect(
        Z_WIDGETS,
        NdcPoint::new(ui.slider_handle_x(), SLIDER_Y),
        SLIDER_HANDLE_SIZE,
        Color::black(),
    );

    for x in [-SPEAKER_X, SPEAKER_X] {
        let center = NdcPoint::new(x, 0.0);
        list.push_rect(Z_WIDGETS, center, SPEAKER_ENCLOSURE_SIZE, ENCLOSURE_GRAY);
        list.push_circle(
            Z_WIDGETS,
            center,
            SPEAKER_CIRCLE_SCALE * pulsing_scale,
            Color::black(),
        );
        list.push_grid(Z_WIDGETS, center, GRID_GRAY);
    }

    list.push_circle(Z_WIDGETS, LIGHT_CENTER, LIGHT_SCALE, light_color);

    list.push_rect(
        Z_WIDGETS,
        NdcPoint::new(0.0, 0.4),
        BAND_PANEL_SIZE,
        BAND_PANEL_GRAY,
    );
    list.push_text(
        Z_LABELS,
        ui.band.label(),
        BAND_TEXT_ORIGIN,
        BAND_TEXT_SCALE,
        Color::white(),
    );

    let power_color = if ui.power_on { POWER_ON_RED } else { POWER_OFF_GREEN };
    list.push_rect(Z_WIDGETS, NdcPoint::new(0.0, -0.6), POWER_RECT_SIZE, power_color);

    list.push_text(Z_LABELS, WATERMARK, WATERMARK_ORIGIN, WATERMARK_SCALE, Color::white());
}
