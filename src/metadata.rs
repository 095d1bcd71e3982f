//! Per-ring data the nesting and winding passes share.

use crate::arcs::{reverse_ring, ArcCollection, ArcId, Ring};
use crate::geo::{Bounds, Point, WindingOrder};

/// A ring plus its signed area and bounding box.
///
/// Built once per call and thrown away afterwards. The sign of `area` always
/// matches the current `ids`: `reverse()` flips both.
#[derive(Debug, Clone, PartialEq)]
pub struct RingMetadata {
    pub ids: Ring,
    /// Signed area; positive iff clockwise.
    pub area: f64,
    pub bounds: Bounds,
}

impl RingMetadata {
    /// # Panics
    ///
    /// Panics if an id is out of range for `arcs`.
    pub fn new(ids: Ring, arcs: &ArcCollection) -> RingMetadata {
        let area = arcs.ring_area(&ids);
        let bounds = arcs.ring_bounds(&ids);
        RingMetadata { ids, area, bounds }
    }

    /// A zero-area ring is considered to be Clockwise.
    pub fn winding_order(&self) -> WindingOrder {
        WindingOrder::from_area(self.area)
    }

    /// Reverses the ring and negates its area.
    ///
    /// The area magnitude is kept as-is, not recomputed.
    pub fn reverse(&mut self) {
        reverse_ring(&mut self.ids);
        self.area = -self.area;
    }

    /// The first vertex of the first arc, walked in the ring's direction.
    ///
    /// # Panics
    ///
    /// Panics if the ring is empty.
    pub fn first_vertex(&self, arcs: &ArcCollection) -> Point {
        arcs.vertex_at(self.ids[0], 0)
    }
}

/// Builds metadata for every ring, in input order.
pub fn ring_metadata<R: AsRef<[ArcId]>>(rings: &[R], arcs: &ArcCollection) -> Vec<RingMetadata> {
    rings.iter()
        .map(|r| RingMetadata::new(r.as_ref().to_vec(), arcs))
        .collect()
}
