use thiserror::Error;

use crate::arcs::ArcId;

/// Errors reported when checking input topology.
///
/// The nesting and winding algorithms themselves never fail. They assume
/// their input passed these checks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("arc {arc_id} has {len} vertices; an arc needs at least 2")]
    DegenerateArc {
        arc_id: usize,
        len: usize,
    },

    #[error("arc id {arc_id} is out of range (the collection holds {arc_count} arcs)")]
    ArcIdOutOfRange {
        arc_id: ArcId,
        arc_count: usize,
    },

    #[error("layer does not contain polygons")]
    NotPolygonLayer,
}
