// Pointer grab bookkeeping for the single in-flight drag
use crate::model::{ItemId, Point};

#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub dragged: Option<ItemId>,
    /// Pointer position relative to the grabbed item's top-left corner.
    pub grab_offset: Point,
}

impl DragState {
    pub fn grab(&mut self, id: ItemId, offset: Point) {
        self.dragged = Some(id);
        self.grab_offset = offset;
    }

    pub fn release(&mut self) -> Option<ItemId> {
        self.grab_offset = Point::default();
        self.dragged.take()
    }
}

/// Clamps a top-left corner so a square of `size` stays inside `width` x `height`.
pub fn clamp_to_container(p: Point, width: f64, height: f64, size: f64) -> Point {
    let max_x = (width - size).max(0.0);
    let max_y = (height - size).max(0.0);
    Point {
        x: p.x.clamp(0.0, max_x),
        y: p.y.clamp(0.0, max_y),
    }
}
