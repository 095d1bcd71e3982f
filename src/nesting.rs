//! Removes rings nested directly inside a ring of the same winding order.
//!
//! That happens when, say, dissolving polygons leaves a duplicate outer ring
//! inside another outer ring.

use log::{debug, trace};

use crate::arcs::{ArcCollection, Ring, Shape};
use crate::index::PathIndex;
use crate::metadata::ring_metadata;

/// Returns `rings`, minus every ring with the same winding order as the
/// ring that most tightly encloses it.
///
/// Surviving rings keep their input order.
///
/// Unenclosed counter-clockwise rings are kept, even though they can't mean
/// anything. Dropping them breaks coordinate rounding in some output formats.
///
/// Assumes ring boundaries don't overlap: they're either nested or disjoint.
/// That should be true after, e.g., dissolving.
pub fn fix_nesting_errors(rings: &[Ring], arcs: &ArcCollection) -> Vec<Ring> {
    if rings.len() <= 1 {
        return rings.to_vec();
    }

    let ring_data = ring_metadata(rings, arcs);
    let shapes: Vec<Shape> = rings.iter().map(|ids| vec![ ids.clone() ]).collect();
    let index = PathIndex::new(&shapes, arcs);

    let ret: Vec<Ring> = rings.iter()
        .enumerate()
        .filter(|&(i, ids)| {
            match index.find_smallest_enclosing_shape(ids) {
                Some(container_id) if ring_data[container_id].winding_order() == ring_data[i].winding_order() => {
                    trace!("ring {} has the same winding order as its container, ring {}; dropping it", i, container_id);
                    false
                }
                _ => true,
            }
        })
        .map(|(_, ids)| ids.clone())
        .collect();

    debug!("fix_nesting_errors: kept {} of {} rings", ret.len(), rings.len());
    ret
}
