use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent};

/// Current pointer state for the window.
///
/// Holds "is down" information and the current pointer position in
/// physical pixels. Per-frame transitions are recorded into an
/// [`InputFrame`].
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in physical pixels, `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event and writes edges to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // The physical release for a press held across focus
                    // loss happens elsewhere and never arrives as an
                    // event. Emit synthetic release edges while clearing
                    // the "down" set, so consumers of release edges (e.g.
                    // the slider drag machine) still see the press end.
                    let (x, y) = self.pointer_pos.unwrap_or((0.0, 0.0));
                    for button in self.buttons_down.drain() {
                        frame.released.push(PointerButtonEvent {
                            button,
                            state: MouseButtonState::Released,
                            x,
                            y,
                        });
                    }
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::PointerButton(ev @ PointerButtonEvent { button, state, x, y }) => {
                self.pointer_pos = Some((x, y));

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(button) {
                            frame.pressed.push(ev);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(&button) {
                            frame.released.push(ev);
                        }
                    }
                }
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_at(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x,
            y,
        })
    }

    fn release_at(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Released,
            x,
            y,
        })
    }

    #[test]
    fn press_and_release_record_one_edge_each() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press_at(10.0, 20.0));
        state.apply_event(&mut frame, release_at(11.0, 21.0));

        assert_eq!(frame.pressed.len(), 1);
        assert_eq!(frame.released.len(), 1);
        assert_eq!(frame.pressed[0].x, 10.0);
        assert!(!state.buttons_down.contains(&MouseButton::Left));
    }

    #[test]
    fn repeated_press_without_release_is_one_edge() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press_at(0.0, 0.0));
        state.apply_event(&mut frame, press_at(0.0, 0.0));

        assert_eq!(frame.pressed.len(), 1);
        assert!(state.buttons_down.contains(&MouseButton::Left));
    }

    #[test]
    fn focus_loss_clears_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press_at(0.0, 0.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.buttons_down.contains(&MouseButton::Left));
    }

    #[test]
    fn focus_loss_emits_release_edge_for_held_button() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, press_at(3.0, 4.0));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        // The press ends observably, even though no release event arrived.
        assert_eq!(frame.released.len(), 1);
        assert_eq!(frame.released[0].button, MouseButton::Left);
        assert_eq!(frame.released[0].state, MouseButtonState::Released);

        // The physical release that eventually arrives is not a second edge.
        state.apply_event(&mut frame, release_at(3.0, 4.0));
        assert_eq!(frame.released.len(), 1);
    }

    #[test]
    fn pointer_leave_forgets_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { x: 5.0, y: 6.0 }));
        assert_eq!(state.pointer_pos, Some((5.0, 6.0)));

        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }
}
