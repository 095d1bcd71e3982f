use std::fmt;
use itertools::Itertools;

pub mod point_in_ring;

pub use self::point_in_ring::{classify_point_in_ring, PointLocation};

/// A place in the plane.
///
/// Coordinates follow the screen convention: (0,0) is the **top left** and y
/// grows downward. That's what makes a positive shoelace sum mean
/// "clockwise".
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point(pub f64, pub f64);

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindingOrder {
    Clockwise,
    CounterClockwise,
}

impl WindingOrder {
    /// Returns the winding order implied by a signed area.
    ///
    /// A zero-area Ring is considered to be Clockwise.
    pub fn from_area(area: f64) -> WindingOrder {
        if area >= 0.0 {
            WindingOrder::Clockwise
        } else {
            WindingOrder::CounterClockwise
        }
    }

    pub fn opposite(self) -> WindingOrder {
        match self {
            WindingOrder::Clockwise => WindingOrder::CounterClockwise,
            WindingOrder::CounterClockwise => WindingOrder::Clockwise,
        }
    }
}

/// Returns 2*area, positive iff the ring is clockwise.
///
/// Assumes (0,0) is the **top left** coordinate. In other words, this isn't
/// WGS84 (in which north is positive): it's like SVG or HTML5 <canvas>
/// coordinates.
///
/// Assumes the first and last Points are identical.
///
/// You can call this method on each arc in turn and sum the results to arrive
/// at the total area (and implicit winding order).
pub fn signed_area2<T: IntoIterator<Item=Point>>(points: T) -> f64 {
    // https://en.wikipedia.org/wiki/Shoelace_formula
    let mut a = 0.0;

    for (p1, p2) in points.into_iter().tuple_windows() {
        a += p1.0 * p2.1 - p2.0 * p1.1;
    }

    a
}

/// An axis-aligned bounding box.
///
/// `Bounds::default()` is empty: it contains nothing and nothing contains it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds {
            xmin: f64::MAX,
            ymin: f64::MAX,
            xmax: f64::MIN,
            ymax: f64::MIN,
        }
    }
}

impl Bounds {
    pub fn from_points<T: IntoIterator<Item=Point>>(points: T) -> Bounds {
        let mut ret = Bounds::default();
        for p in points {
            ret.extend_point(p);
        }
        ret
    }

    /// Note that a single-point bounds (width and height 0) is NOT empty.
    pub fn is_empty(&self) -> bool {
        self.xmin > self.xmax || self.ymin > self.ymax
    }

    pub fn extend_point(&mut self, p: Point) {
        self.xmin = self.xmin.min(p.0);
        self.ymin = self.ymin.min(p.1);
        self.xmax = self.xmax.max(p.0);
        self.ymax = self.ymax.max(p.1);
    }

    pub fn width(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.xmax - self.xmin }
    }

    pub fn height(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.ymax - self.ymin }
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// `true` iff `other` lies within (or on the edge of) `self`.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        !self.is_empty() && !other.is_empty()
            && other.xmin >= self.xmin && other.xmax <= self.xmax
            && other.ymin >= self.ymin && other.ymax <= self.ymax
    }

    pub fn same_bounds(&self, other: &Bounds) -> bool {
        !self.is_empty() && self == other
    }
}
