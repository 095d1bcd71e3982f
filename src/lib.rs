//! Repairs ring nesting and winding order in a shared-arc polygon topology.
//!
//! Polygons are rings; rings are sequences of signed ids into an
//! `ArcCollection`. Two passes are available:
//!
//! * `fix_nesting_errors()` drops rings nested directly inside a ring of the
//!   same winding order.
//! * `rewind_polygon()` / `rewind_polygons()` make outer rings clockwise and
//!   alternate winding order at each level of nesting.
//!
//! # Examples
//!
//! ```
//! use ringnest::{rewind_polygon, ArcCollection, Point};
//!
//! let square = |x: f64, size: f64| vec![
//!     Point(x, x), Point(x + size, x), Point(x + size, x + size), Point(x, x + size), Point(x, x),
//! ];
//! let arcs = ArcCollection::new(vec![ square(0.0, 10.0), square(2.0, 6.0) ]).unwrap();
//!
//! // Both rings start out clockwise; the inner one becomes a hole.
//! let rings = rewind_polygon(vec![ vec![ 1 ], vec![ 0 ] ], &arcs);
//! assert_eq!(vec![ vec![ 0 ], vec![ !1 ] ], rings);
//! ```

pub mod arcs;
pub mod geo;
pub mod index;
pub mod layer;
pub mod metadata;
mod error;
mod nesting;
mod rewind;

pub use arcs::{ArcCollection, ArcId, Ring, Shape};
pub use error::TopologyError;
pub use geo::{Bounds, Point, WindingOrder};
pub use layer::{GeometryType, Layer};
pub use nesting::fix_nesting_errors;
pub use rewind::{rewind_polygon, rewind_polygons, ring_in_ring, set_ring_winding};
