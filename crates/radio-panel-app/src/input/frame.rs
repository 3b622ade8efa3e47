use super::types::PointerButtonEvent;

/// Per-frame input deltas.
///
/// [`InputState`](super::InputState) holds the current state (held buttons,
/// pointer position); `InputFrame` holds the press/release edges observed
/// during the current frame, in arrival order.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Button press edges this frame, with pointer position at the press.
    pub pressed: Vec<PointerButtonEvent>,

    /// Button release edges this frame.
    pub released: Vec<PointerButtonEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }
}
