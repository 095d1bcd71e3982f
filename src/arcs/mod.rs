//! Shared arcs and the rings that reference them.
//!
//! An arc is a polyline. A ring is a closed loop made of arcs, written as a
//! sequence of signed arc ids. Rings never own vertices: two neighbouring
//! polygons reference the same arc, one forward and the other in reverse.

use crate::error::TopologyError;
use crate::geo::{signed_area2, Bounds, Point};

mod reverse;

pub use self::reverse::{reverse_ring, reversed_ring};

// There are a few ways to let rings share arcs:
//
// * Reference counting: easy to get wrong, and reversing a ring would mean
//   reversing a shared polyline.
// * Pointers: needs unsafe{}.
// * Array indexes: a ring is a list of integers, and the sign says which way
//   to walk the arc.
//
// Array indexes it is. `id >= 0` walks arc `id` forward; `!id` (that is,
// `-id - 1`) walks the same arc backward.
pub type ArcId = i32;

/// A closed loop, as a sequence of signed arc ids.
pub type Ring = Vec<ArcId>;

/// One polygon: an outer ring plus any holes (and islands in holes...).
pub type Shape = Vec<Ring>;

/// Returns the index of the arc `id` refers to, regardless of direction.
pub fn absolute_arc_id(id: ArcId) -> usize {
    if id < 0 { !id as usize } else { id as usize }
}

/// `true` iff `id` walks its arc backward.
pub fn is_reversed(id: ArcId) -> bool {
    id < 0
}

/// An immutable pool of arcs, addressed by index.
#[derive(Debug, Clone, Default)]
pub struct ArcCollection {
    arcs: Box<[Box<[Point]>]>,
}

impl ArcCollection {
    /// Builds the pool.
    ///
    /// Every arc needs at least two vertices: its endpoints.
    pub fn new(arcs: Vec<Vec<Point>>) -> Result<ArcCollection, TopologyError> {
        for (i, arc) in arcs.iter().enumerate() {
            if arc.len() < 2 {
                return Err(TopologyError::DegenerateArc { arc_id: i, len: arc.len() });
            }
        }

        Ok(ArcCollection {
            arcs: arcs.into_iter().map(|a| a.into_boxed_slice()).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Number of vertices in the arc `id` refers to.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn arc_len(&self, id: ArcId) -> usize {
        self.arcs[absolute_arc_id(id)].len()
    }

    /// Returns the `index`th vertex along arc `id`, in the direction `id`
    /// walks it.
    ///
    /// # Panics
    ///
    /// Panics if `id` or `index` is out of range.
    pub fn vertex_at(&self, id: ArcId, index: usize) -> Point {
        let points = &self.arcs[absolute_arc_id(id)];
        if is_reversed(id) {
            points[points.len() - 1 - index]
        } else {
            points[index]
        }
    }

    /// Iterates over the vertices of arc `id`, in the direction `id` walks it.
    pub fn arc_points<'a>(&'a self, id: ArcId) -> impl Iterator<Item=Point> + 'a {
        let points = &self.arcs[absolute_arc_id(id)];
        let reversed = is_reversed(id);
        (0 .. points.len()).map(move |i| if reversed { points[points.len() - 1 - i] } else { points[i] })
    }

    /// Iterates over the boundary of a ring.
    ///
    /// Consecutive arcs share an endpoint; it's emitted once. The last arc
    /// ends where the first one starts, so the sequence is closed and can go
    /// straight into `signed_area2()`.
    pub fn ring_points<'a>(&'a self, ids: &'a [ArcId]) -> impl Iterator<Item=Point> + 'a {
        let first = ids.first().map(|&id| self.vertex_at(id, 0));
        first.into_iter()
            .chain(ids.iter().flat_map(move |&id| self.arc_points(id).skip(1)))
    }

    /// Returns the bounding box of every vertex in the ring.
    pub fn ring_bounds(&self, ids: &[ArcId]) -> Bounds {
        let mut ret = Bounds::default();
        for &id in ids {
            for p in self.arc_points(id) {
                ret.extend_point(p);
            }
        }
        ret
    }

    /// Returns the ring's signed area: positive iff clockwise.
    pub fn ring_area(&self, ids: &[ArcId]) -> f64 {
        signed_area2(self.ring_points(ids)) / 2.0
    }

    /// Checks every id in `ids` refers to an arc in this collection.
    ///
    /// The algorithms in this crate assume valid ids and panic otherwise.
    /// Call this first if the ids come from somewhere you don't trust.
    pub fn validate_ring(&self, ids: &[ArcId]) -> Result<(), TopologyError> {
        match ids.iter().find(|&&id| absolute_arc_id(id) >= self.arcs.len()) {
            Some(&arc_id) => Err(TopologyError::ArcIdOutOfRange { arc_id, arc_count: self.arcs.len() }),
            None => Ok(()),
        }
    }
}
