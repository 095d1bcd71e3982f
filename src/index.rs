//! Answers "which shape encloses this ring?"

use log::trace;

use crate::arcs::{ArcCollection, ArcId, Shape};
use crate::geo::{classify_point_in_ring, Bounds, Point, PointLocation};

#[derive(Debug)]
struct IndexedRing<'a> {
    shape_id: usize,
    ids: &'a [ArcId],
    bounds: Bounds,
}

/// An index over the rings of a list of shapes.
///
/// It borrows the shapes, so it can't outlive them: rewinding a ring means
/// building a new index.
#[derive(Debug)]
pub struct PathIndex<'a> {
    arcs: &'a ArcCollection,
    rings: Vec<IndexedRing<'a>>,
}

impl<'a> PathIndex<'a> {
    pub fn new(shapes: &'a [Shape], arcs: &'a ArcCollection) -> PathIndex<'a> {
        let rings = shapes.iter()
            .enumerate()
            .flat_map(|(shape_id, shape)| shape.iter().map(move |ring| (shape_id, ring)))
            .map(|(shape_id, ring)| IndexedRing {
                shape_id,
                ids: &ring[..],
                bounds: arcs.ring_bounds(ring),
            })
            .collect();

        PathIndex { arcs, rings }
    }

    /// Returns the id of the shape whose ring most tightly encloses `ids`.
    ///
    /// A candidate ring must contain the query's bounding box, must not have
    /// the very same bounding box (that skips the query ring itself, and any
    /// congruent ring), and must contain the test point. The candidate with
    /// the smallest bounding box wins; on a tie, the last one indexed.
    ///
    /// Assumes ring boundaries don't cross.
    pub fn find_smallest_enclosing_shape(&self, ids: &[ArcId]) -> Option<usize> {
        if ids.is_empty() {
            return None;
        }

        let bounds = self.arcs.ring_bounds(ids);
        let point = ring_test_point(ids, self.arcs);
        let mut smallest: Option<&IndexedRing> = None;

        for candidate in self.rings.iter() {
            if !candidate.bounds.contains_bounds(&bounds) || candidate.bounds.same_bounds(&bounds) {
                continue;
            }

            if let Some(s) = smallest {
                if s.bounds.area() < candidate.bounds.area() {
                    continue;
                }
            }

            if classify_point_in_ring(point, candidate.ids, self.arcs) == PointLocation::Inside {
                smallest = Some(candidate);
            }
        }

        trace!("smallest enclosing shape of {:?}: {:?}", ids, smallest.map(|r| r.shape_id));
        smallest.map(|r| r.shape_id)
    }
}

/// Returns the midpoint of the ring's first segment.
///
/// Vertices may be shared with an enclosing ring, but (as long as boundaries
/// don't overlap) a segment midpoint can't be.
fn ring_test_point(ids: &[ArcId], arcs: &ArcCollection) -> Point {
    let a = arcs.vertex_at(ids[0], 0);
    let b = arcs.vertex_at(ids[0], 1);
    Point((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}
