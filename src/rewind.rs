//! Sets the winding order of polygon rings so outer rings are clockwise,
//! holes are counter-clockwise, islands in holes are clockwise, and so on.

use log::{debug, trace};

use crate::arcs::{ArcCollection, Ring};
use crate::error::TopologyError;
use crate::geo::{classify_point_in_ring, PointLocation, WindingOrder};
use crate::layer::{GeometryType, Layer};
use crate::metadata::RingMetadata;

/// Rewinds every polygon in the layer. See `rewind_polygon()`.
///
/// Null shapes stay null. A layer without geometry is left alone.
///
/// # Errors
///
/// Returns `TopologyError::NotPolygonLayer`, and leaves the layer untouched,
/// if the layer holds points or polylines: their "rings" aren't rings, so
/// rewinding them would scramble them.
pub fn rewind_polygons(layer: &mut Layer, arcs: &ArcCollection) -> Result<(), TopologyError> {
    match layer.geometry_type {
        None | Some(GeometryType::Polygon) => {}
        Some(_) => return Err(TopologyError::NotPolygonLayer),
    }

    for shape in layer.shapes.iter_mut() {
        if let Some(rings) = shape.take() {
            *shape = Some(rewind_polygon(rings, arcs));
        }
    }

    Ok(())
}

/// Returns the polygon's rings with consistent winding order.
///
/// A ring that isn't inside any other ring becomes clockwise. A ring inside
/// another becomes the opposite of its parent.
///
/// Finding the parent is approximate. Rings are sorted by area, largest
/// first, and a ring's parent is the _next-largest_ ring that contains it. If
/// area order doesn't match nesting depth (a big hole in a small island, next
/// to a tiny island in a huge shell...) a deeply-nested ring can get the
/// wrong parent.
///
/// The returned rings are in that sorted order, not input order. Equal-area
/// rings keep their input order.
///
/// # Panics
///
/// Panics if a ring refers to an arc that isn't in `arcs`.
pub fn rewind_polygon(rings: Vec<Ring>, arcs: &ArcCollection) -> Vec<Ring> {
    let mut ring_data: Vec<RingMetadata> = rings.into_iter()
        .map(|ids| RingMetadata::new(ids, arcs))
        .collect();

    // Vec::sort_by is stable
    ring_data.sort_by(|a, b| b.area.abs().total_cmp(&a.area.abs()));

    let mut n_reversed = 0;

    for i in 0 .. ring_data.len() {
        // Nearest larger ring first
        let parent = ring_data[.. i].iter().rposition(|larger| ring_in_ring(&ring_data[i], larger, arcs));
        let winding_order = match parent {
            Some(j) => ring_data[j].winding_order().opposite(),
            None => WindingOrder::Clockwise,
        };

        trace!("ring {} (area {}): parent {:?}, should be {:?}", i, ring_data[i].area, parent, winding_order);

        if set_ring_winding(&mut ring_data[i], winding_order) {
            n_reversed += 1;
        }
    }

    debug!("rewind_polygon: reversed {} of {} rings", n_reversed, ring_data.len());

    ring_data.into_iter().map(|data| data.ids).collect()
}

/// Reverses the ring if it doesn't have the given winding order.
///
/// A zero-area ring is Clockwise whichever way it's walked, so it's never
/// reversed.
///
/// Returns `true` if it reversed the ring.
pub fn set_ring_winding(data: &mut RingMetadata, winding_order: WindingOrder) -> bool {
    if data.area == 0.0 || data.winding_order() == winding_order {
        false
    } else {
        data.reverse();
        true
    }
}

/// `true` iff ring `a` is inside ring `b`.
///
/// Only tests `a`'s first vertex, so it assumes the rings don't cross. A
/// vertex on `b`'s boundary doesn't count as inside.
pub fn ring_in_ring(a: &RingMetadata, b: &RingMetadata, arcs: &ArcCollection) -> bool {
    if !b.bounds.contains_bounds(&a.bounds) {
        return false;
    }
    classify_point_in_ring(a.first_vertex(arcs), &b.ids, arcs) == PointLocation::Inside
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arcs::Shape;
    use crate::geo::Point;
    use approx::assert_relative_eq;

    fn square(x: f64, y: f64, size: f64) -> Vec<Point> {
        vec![ Point(x, y), Point(x + size, y), Point(x + size, y + size), Point(x, y + size), Point(x, y) ]
    }

    // Arcs 0-2 are concentric squares with areas 100, 64 and 36, all
    // clockwise. Arc 3 is a 4x4 square off to the side. Arc 4 is a 1x1
    // square inside the smallest concentric one.
    fn arcs() -> ArcCollection {
        let _ = env_logger::builder().is_test(true).try_init();

        ArcCollection::new(vec![
            square(0.0, 0.0, 10.0),
            square(1.0, 1.0, 8.0),
            square(2.0, 2.0, 6.0),
            square(20.0, 0.0, 4.0),
            square(5.0, 5.0, 1.0),
        ]).unwrap()
    }

    fn areas(rings: &[Ring], arcs: &ArcCollection) -> Vec<f64> {
        rings.iter().map(|r| arcs.ring_area(r)).collect()
    }

    #[test]
    fn concentric_squares_alternate() {
        let arcs = arcs();
        let rewound = rewind_polygon(vec![ vec![ 0 ], vec![ 1 ], vec![ 2 ] ], &arcs);

        assert_eq!(vec![ vec![ 0 ], vec![ !1 ], vec![ 2 ] ], rewound);
        let a = areas(&rewound, &arcs);
        assert_relative_eq!(100.0, a[0]);
        assert_relative_eq!(-64.0, a[1]);
        assert_relative_eq!(36.0, a[2]);
    }

    #[test]
    fn sort_largest_first() {
        let arcs = arcs();
        let rewound = rewind_polygon(vec![ vec![ 2 ], vec![ !0 ], vec![ 1 ] ], &arcs);
        assert_eq!(vec![ vec![ 0 ], vec![ !1 ], vec![ 2 ] ], rewound);
    }

    #[test]
    fn unenclosed_rings_become_clockwise() {
        let arcs = arcs();
        let rewound = rewind_polygon(vec![ vec![ !3 ], vec![ !0 ] ], &arcs);
        assert_eq!(vec![ vec![ 0 ], vec![ 3 ] ], rewound);
    }

    #[test]
    fn equal_areas_keep_input_order() {
        let arcs = ArcCollection::new(vec![
            square(0.0, 0.0, 2.0),
            square(10.0, 0.0, 2.0),
            square(20.0, 0.0, 2.0),
        ]).unwrap();

        let rewound = rewind_polygon(vec![ vec![ 2 ], vec![ !0 ], vec![ 1 ] ], &arcs);
        assert_eq!(vec![ vec![ 2 ], vec![ 0 ], vec![ 1 ] ], rewound);
    }

    #[test]
    fn preserve_count_and_magnitude() {
        let arcs = arcs();
        let input = vec![ vec![ !4 ], vec![ 3 ], vec![ !2 ], vec![ 0 ], vec![ !1 ] ];
        let mut before: Vec<f64> = areas(&input, &arcs).iter().map(|a| a.abs()).collect();
        let rewound = rewind_polygon(input, &arcs);
        let mut after: Vec<f64> = areas(&rewound, &arcs).iter().map(|a| a.abs()).collect();

        before.sort_by(|a, b| a.total_cmp(b));
        after.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(5, rewound.len());
        assert_eq!(before, after);
    }

    #[test]
    fn children_oppose_parents() {
        let arcs = arcs();
        let rewound = rewind_polygon(vec![ vec![ 4 ], vec![ 3 ], vec![ 2 ], vec![ 0 ], vec![ 1 ] ], &arcs);
        let data: Vec<RingMetadata> = rewound.into_iter().map(|ids| RingMetadata::new(ids, &arcs)).collect();

        for i in 0 .. data.len() {
            match data[.. i].iter().rposition(|larger| ring_in_ring(&data[i], larger, &arcs)) {
                Some(j) => assert_ne!(data[i].winding_order(), data[j].winding_order()),
                None => assert_eq!(WindingOrder::Clockwise, data[i].winding_order()),
            }
        }
    }

    #[test]
    fn single_and_empty_polygon() {
        let arcs = arcs();
        assert_eq!(vec![ vec![ 3 ] ], rewind_polygon(vec![ vec![ !3 ] ], &arcs));
        assert_eq!(Vec::<Ring>::new(), rewind_polygon(vec![], &arcs));
    }

    #[test]
    fn set_winding() {
        let arcs = arcs();
        let mut data = RingMetadata::new(vec![ 3 ], &arcs);

        assert!(!set_ring_winding(&mut data, WindingOrder::Clockwise));
        assert_eq!(vec![ 3 ], data.ids);

        assert!(set_ring_winding(&mut data, WindingOrder::CounterClockwise));
        assert_eq!(vec![ !3 ], data.ids);
        assert_relative_eq!(-16.0, data.area);
    }

    // Arc 0 is a clockwise 10x10 square. Arc 1 goes out and back along a
    // line inside it, so its area is 0.
    fn arcs_with_sliver() -> ArcCollection {
        ArcCollection::new(vec![
            square(0.0, 0.0, 10.0),
            vec![ Point(2.0, 2.0), Point(5.0, 2.0), Point(2.0, 2.0) ],
        ]).unwrap()
    }

    #[test]
    fn zero_area_ring_is_never_reversed() {
        let arcs = arcs_with_sliver();
        let mut data = RingMetadata::new(vec![ 1 ], &arcs);

        assert!(!set_ring_winding(&mut data, WindingOrder::CounterClockwise));
        assert!(!set_ring_winding(&mut data, WindingOrder::CounterClockwise));
        assert_eq!(vec![ 1 ], data.ids);
        assert_eq!(WindingOrder::Clockwise, data.winding_order());
    }

    #[test]
    fn rewind_zero_area_ring_is_stable() {
        let arcs = arcs_with_sliver();
        let once = rewind_polygon(vec![ vec![ 1 ], vec![ 0 ] ], &arcs);
        let twice = rewind_polygon(once.clone(), &arcs);

        assert_eq!(vec![ vec![ 0 ], vec![ 1 ] ], once);
        assert_eq!(once, twice);
    }

    #[test]
    fn ring_in_ring_needs_bounds_and_point() {
        let arcs = arcs();
        let outer = RingMetadata::new(vec![ 0 ], &arcs);
        let inner = RingMetadata::new(vec![ 2 ], &arcs);
        let aside = RingMetadata::new(vec![ 3 ], &arcs);

        assert!(ring_in_ring(&inner, &outer, &arcs));
        assert!(!ring_in_ring(&outer, &inner, &arcs));
        assert!(!ring_in_ring(&aside, &outer, &arcs));
        assert!(!ring_in_ring(&outer, &outer, &arcs));
    }

    #[test]
    fn rewind_layer() {
        let arcs = arcs();
        let shapes: Vec<Option<Shape>> = vec![
            Some(vec![ vec![ 2 ], vec![ 1 ], vec![ 0 ] ]),
            None,
            Some(vec![ vec![ !3 ] ]),
        ];
        let mut layer = Layer::polygons(shapes);

        rewind_polygons(&mut layer, &arcs).unwrap();

        assert_eq!(vec![
            Some(vec![ vec![ 0 ], vec![ !1 ], vec![ 2 ] ]),
            None,
            Some(vec![ vec![ 3 ] ]),
        ], layer.shapes);
    }

    #[test]
    fn neighbours_share_an_arc() {
        // A--B--E
        // |  |  |
        // D--C--F
        //
        // Arc 1 (B-C) is shared: the left polygon walks it forward, the
        // right polygon walks it backward.
        let arcs = ArcCollection::new(vec![
            vec![ Point(2.0, 2.0), Point(0.0, 2.0), Point(0.0, 0.0), Point(2.0, 0.0) ],
            vec![ Point(2.0, 0.0), Point(2.0, 2.0) ],
            vec![ Point(2.0, 0.0), Point(4.0, 0.0), Point(4.0, 2.0), Point(2.0, 2.0) ],
        ]).unwrap();

        let mut layer = Layer::polygons(vec![
            Some(vec![ vec![ !0, !1 ] ]),
            Some(vec![ vec![ !1, 2 ] ]),
        ]);

        rewind_polygons(&mut layer, &arcs).unwrap();

        assert_eq!(vec![
            Some(vec![ vec![ 1, 0 ] ]),
            Some(vec![ vec![ !1, 2 ] ]),
        ], layer.shapes);
        assert_relative_eq!(4.0, arcs.ring_area(&[ 1, 0 ]));
        assert_relative_eq!(4.0, arcs.ring_area(&[ !1, 2 ]));
    }

    #[test]
    fn rewind_empty_layer() {
        let arcs = arcs();
        let mut layer = Layer::default();
        rewind_polygons(&mut layer, &arcs).unwrap();
        assert!(layer.shapes.is_empty());
    }

    #[test]
    fn refuse_non_polygon_layer() {
        let arcs = arcs();
        let mut layer = Layer {
            geometry_type: Some(GeometryType::Polyline),
            shapes: vec![ Some(vec![ vec![ !3 ] ]) ],
        };

        assert_eq!(Err(TopologyError::NotPolygonLayer), rewind_polygons(&mut layer, &arcs));
        assert_eq!(Some(vec![ vec![ !3 ] ]), layer.shapes[0]);
    }
}
