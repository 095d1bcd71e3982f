use itertools::Itertools;

use crate::arcs::{ArcCollection, ArcId};
use super::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointLocation {
    Inside,
    OnBoundary,
    Outside,
}

/// Returns whether `point` is inside, on the boundary of, or outside the
/// ring `ids`.
///
/// Uses the even-odd rule, so winding order doesn't matter. A point exactly
/// on a segment is `OnBoundary`; there's no tolerance.
pub fn classify_point_in_ring(point: Point, ids: &[ArcId], arcs: &ArcCollection) -> PointLocation {
    let mut inside = false;

    for (a, b) in arcs.ring_points(ids).tuple_windows() {
        if is_on_segment(point, a, b) {
            return PointLocation::OnBoundary;
        }

        // Horizontal segments never satisfy this, so they can't divide by zero
        if (a.1 > point.1) != (b.1 > point.1) {
            let x = a.0 + (point.1 - a.1) * (b.0 - a.0) / (b.1 - a.1);
            if point.0 < x {
                inside = !inside;
            }
        }
    }

    if inside { PointLocation::Inside } else { PointLocation::Outside }
}

fn is_on_segment(p: Point, a: Point, b: Point) -> bool {
    let cross = (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
    cross == 0.0
        && p.0 >= a.0.min(b.0) && p.0 <= a.0.max(b.0)
        && p.1 >= a.1.min(b.1) && p.1 <= a.1.max(b.1)
}
