use crate::arcs::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GeometryType {
    Point,
    Polyline,
    Polygon,
}

/// A list of shapes, all of one geometry type.
///
/// A `None` shape is a placeholder: a record with no geometry. It keeps its
/// position so shapes stay aligned with whatever data goes with them.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer {
    /// `None` when the layer has no geometry at all.
    pub geometry_type: Option<GeometryType>,
    pub shapes: Vec<Option<Shape>>,
}

impl Layer {
    pub fn polygons(shapes: Vec<Option<Shape>>) -> Layer {
        Layer {
            geometry_type: Some(GeometryType::Polygon),
            shapes,
        }
    }
}
