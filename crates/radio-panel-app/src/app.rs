use radio_panel_core::coords::{Color, ndc_from_pixel};
use radio_panel_core::panel;
use radio_panel_core::scene::DrawList;
use radio_panel_core::state::{Blink, ControlSet, Pulse, UiState};

use crate::core::{App, AppControl, FrameCtx};
use crate::input::MouseButton;
use crate::render::{MeshRenderer, TextRenderer};
use crate::text::GlyphSet;

/// The radio control panel application.
///
/// Per frame: apply this frame's pointer edges to the UI state, advance the
/// animation timers one fixed step, rebuild the draw list, and render it.
pub struct RadioApp {
    ui: UiState,
    controls: ControlSet,
    pulse: Pulse,
    blink: Blink,

    draw_list: DrawList,
    glyph_set: GlyphSet,
    mesh_renderer: MeshRenderer,
    text_renderer: TextRenderer,
}

impl RadioApp {
    pub fn new(glyph_set: GlyphSet) -> Self {
        Self {
            ui: UiState::new(),
            controls: ControlSet::panel(),
            pulse: Pulse::new(),
            blink: Blink::new(),
            draw_list: DrawList::new(),
            glyph_set,
            mesh_renderer: MeshRenderer::new(),
            text_renderer: TextRenderer::new(),
        }
    }

    fn apply_input(&mut self, ctx: &FrameCtx<'_>) {
        let (width, height) = ctx.surface_size();

        for ev in &ctx.input_frame.pressed {
            if ev.button != MouseButton::Left {
                continue;
            }
            let p = ndc_from_pixel(ev.x, ev.y, width, height);
            self.controls.press(&mut self.ui, p);
        }

        for ev in &ctx.input_frame.released {
            if ev.button != MouseButton::Left {
                continue;
            }
            self.controls.release(&mut self.ui);
        }

        // While the handle is grabbed, it follows the pointer even outside
        // the track; the value itself is clamped. A release edge always
        // arrives (synthesized on focus loss), so the drag cannot stick.
        if self.ui.slider_dragging {
            if let Some((px, _)) = ctx.input.pointer_pos {
                let p = ndc_from_pixel(px, 0.0, width, height);
                self.ui.drag_slider(p.x);
            }
        }
    }
}

impl App for RadioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        self.apply_input(ctx);

        self.pulse.advance(self.ui.power_on);
        self.blink.advance(self.ui.power_on);

        self.draw_list.clear();
        panel::record_panel(
            &self.ui,
            self.pulse.scale(self.ui.power_on, self.ui.vibration_intensity()),
            self.blink.color(self.ui.power_on),
            &mut self.draw_list,
        );

        let draw_list = &mut self.draw_list;
        let glyph_set = &self.glyph_set;
        let mesh_renderer = &mut self.mesh_renderer;
        let text_renderer = &mut self.text_renderer;

        ctx.render(Color::black(), |rctx, target| {
            mesh_renderer.render(rctx, target, draw_list);
            text_renderer.render(rctx, target, draw_list, glyph_set);
        })
    }
}
