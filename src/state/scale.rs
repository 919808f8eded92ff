// Physical scale: what sits on the plate and where the pointer points
use crate::config::PointerConfig;
use crate::model::{Geometry, ItemId, Point, Rect};

use super::drag::clamp_to_container;

pub const NEUTRAL_ANGLE: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    pub occupant: Option<ItemId>,
    /// Pointer rotation in degrees, held from the drop until the reset.
    pub pointer_angle: f64,
    /// Plate dipped while the reading settles.
    pub is_animating: bool,
}

impl Default for ScaleState {
    fn default() -> Self {
        Self {
            occupant: None,
            pointer_angle: NEUTRAL_ANGLE,
            is_animating: false,
        }
    }
}

impl ScaleState {
    pub fn load(&mut self, id: ItemId, weight: f64, pointer: &PointerConfig) {
        self.occupant = Some(id);
        self.pointer_angle = pointer_angle(weight, pointer);
        self.is_animating = true;
    }

    pub fn settle(&mut self) {
        self.is_animating = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

pub fn pointer_angle(weight: f64, pointer: &PointerConfig) -> f64 {
    pointer.base_degrees + weight * pointer.degrees_per_kg
}

/// Inclusive on all four edges.
pub fn is_over(rect: &Rect, p: Point) -> bool {
    p.x >= rect.left() && p.x <= rect.right() && p.y >= rect.top() && p.y <= rect.bottom()
}

/// Container-local top-left for an item resting on the plate: centered on the
/// scale horizontally, top edge `item_size - plate_offset` above the scale's
/// top edge, shifted by the item's own nudge and kept inside the container.
pub fn plate_anchor(geo: &Geometry, item_size: f64, plate_offset: f64, nudge: f64) -> Point {
    let left = geo.scale.left() - geo.container.left();
    let top = geo.scale.top() - geo.container.top();
    let raw = Point {
        x: left + (geo.scale.width - item_size) / 2.0,
        y: top - item_size + plate_offset + nudge,
    };
    clamp_to_container(raw, geo.container.width, geo.container.height, item_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geo() -> Geometry {
        Geometry {
            container: Rect::new(100.0, 50.0, 1200.0, 400.0),
            scale: Rect::new(1040.0, 190.0, 180.0, 220.0),
        }
    }

    #[test]
    fn angle_is_linear_in_weight() {
        let p = PointerConfig::default();
        assert_eq!(pointer_angle(8.0, &p), 144.0);
        let offset = PointerConfig { base_degrees: 65.0, degrees_per_kg: 9.0 };
        assert_eq!(pointer_angle(9.0, &offset), 146.0);
    }

    #[test]
    fn edges_count_as_inside() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(is_over(&r, Point::new(10.0, 20.0)));
        assert!(is_over(&r, Point::new(110.0, 70.0)));
        assert!(!is_over(&r, Point::new(110.01, 40.0)));
        assert!(!is_over(&r, Point::new(50.0, 19.99)));
    }

    #[test]
    fn anchor_centers_item_above_plate() {
        let a = plate_anchor(&geo(), 220.0, 90.0, 0.0);
        // scale left in container = 940, centered: 940 + (180 - 220) / 2
        assert_eq!(a.x, 920.0);
        // scale top in container = 140, so 140 - (220 - 90)
        assert_eq!(a.y, 10.0);
        let small = plate_anchor(&geo(), 100.0, 40.0, 5.0);
        assert_eq!(small, Point::new(980.0, 85.0));
    }

    #[test]
    fn nudge_moves_the_anchor() {
        let plain = plate_anchor(&geo(), 220.0, 90.0, 0.0);
        let nudged = plate_anchor(&geo(), 220.0, 90.0, 12.0);
        assert_eq!(nudged.y - plain.y, 12.0);
        assert_eq!(nudged.x, plain.x);
    }

    #[test]
    fn anchor_above_container_is_clamped() {
        // 140 - 220 + 40 < 0
        let a = plate_anchor(&geo(), 220.0, 40.0, 0.0);
        assert_eq!(a, Point::new(920.0, 0.0));
    }

    #[test]
    fn load_then_clear_returns_to_neutral() {
        let mut s = ScaleState::default();
        s.load(ItemId(2), 8.0, &PointerConfig::default());
        assert!(s.is_animating);
        assert_eq!(s.occupant, Some(ItemId(2)));
        s.settle();
        assert!(!s.is_animating);
        assert_eq!(s.pointer_angle, 144.0);
        s.clear();
        assert_eq!(s, ScaleState::default());
    }
}
