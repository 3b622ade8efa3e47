/// Z-layer of a draw item. Higher values paint on top.
///
/// The panel uses three layers: background plates, widgets, and text
/// labels (see [`crate::panel`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

/// Stable sort key: z-layer ascending, then insertion order within a
/// layer. Field order matters — the derived `Ord` compares `z` first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    /// Insertion index within the same z-layer.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

// ── tests ──────────────────────────────────────────────────────────────
