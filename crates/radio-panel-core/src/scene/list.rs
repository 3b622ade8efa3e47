use crate::coords::{Color, NdcPoint};

use super::cmd::{CircleCmd, GridCmd, RectCmd, TextCmd};
use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); paint-order iteration reuses an internal index buffer,
/// so a warmed list allocates nothing per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, center: NdcPoint, scale: f32, color: Color) {
        self.push(z, DrawCmd::Circle(CircleCmd { center, scale, color }));
    }

    /// Records a rectangle draw command. `size` is the full extent.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, center: NdcPoint, size: NdcPoint, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd { center, size, color }));
    }

    /// Records a speaker-grid draw command.
    #[inline]
    pub fn push_grid(&mut self, z: ZIndex, center: NdcPoint, color: Color) {
        self.push(z, DrawCmd::Grid(GridCmd { center, color }));
    }

    /// Records a text draw command.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        origin: NdcPoint,
        scale: f32,
        color: Color,
    ) {
        self.push(z, DrawCmd::Text(TextCmd { text: text.into(), origin, scale, color }));
    }

    /// Iterates items in paint order (back-to-front) without cloning.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_at(x: f32) -> DrawCmd {
        DrawCmd::Circle(CircleCmd {
            center: NdcPoint::new(x, 0.0),
            scale: 1.0,
            color: Color::black(),
        })
    }

    #[test]
    fn equal_z_preserves_insertion_order() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(0), circle_at(1.0));
        list.push(ZIndex::new(0), circle_at(2.0));
        list.push(ZIndex::new(0), circle_at(3.0));

        let xs: Vec<f32> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.center.x,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn lower_z_paints_first() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(5), circle_at(1.0));
        list.push(ZIndex::new(-1), circle_at(2.0));

        let xs: Vec<f32> = list
            .iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Circle(c) => c.center.x,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(xs, vec![2.0, 1.0]);
    }

    #[test]
    fn clear_resets_order_counter() {
        let mut list = DrawList::new();
        list.push(ZIndex::new(0), circle_at(1.0));
        list.clear();
        assert!(list.items().is_empty());

        list.push(ZIndex::new(0), circle_at(2.0));
        assert_eq!(list.items()[0].key.order, 0);
    }
}
