// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated geometry value types.
//!
//! [`Polyline`] is deliberately permissive (validation is deferred to
//! consumers, matching the looser semantics of the category), while
//! [`Polygon`] enforces its invariants at construction: at least 3 distinct
//! vertices, non-zero area, and geometric simplicity.

use crate::error::{Error, Result};
use crate::ring;
use nalgebra::{Point3, Vector3};

/// Ordered point sequence. May be empty or a single point; no minimum
/// length is enforced here.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Polyline {
    points: Vec<Point3<f64>>,
}

impl Polyline {
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Simple closed planar ring with non-zero area.
///
/// The ring is stored open (no duplicated terminal vertex); closure is
/// implicit between the last and first vertex.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Polygon {
    vertices: Vec<Point3<f64>>,
    normal: Vector3<f64>,
    area: f64,
}

impl Polygon {
    /// Construct and validate a polygon from an ordered ring of points.
    ///
    /// Vertex order is semantically meaningful and is never re-sorted. An
    /// explicitly closed input ring (last vertex equal to the first) is
    /// accepted; the duplicate terminal vertex is dropped. Consecutive
    /// duplicate vertices are collapsed before validation.
    pub fn new(mut points: Vec<Point3<f64>>) -> Result<Self> {
        // Drop the explicit closing vertex, if present
        if points.len() >= 2 {
            let first = points[0];
            let last = points[points.len() - 1];
            if (last - first).norm() < ring::EPS {
                points.pop();
            }
        }

        // Collapse consecutive duplicates
        points.dedup_by(|a, b| (*a - *b).norm() < ring::EPS);

        if points.len() < 3 {
            return Err(Error::InvalidPolygon(format!(
                "only {} distinct vertices after closing the ring",
                points.len()
            )));
        }

        let (normal, doubled_area) = ring::ring_normal(&points).ok_or_else(|| {
            Error::InvalidPolygon("zero area (collinear or degenerate ring)".to_string())
        })?;

        let flat = ring::project_to_plane(&points, &normal);
        if ring::is_self_intersecting(&flat) {
            return Err(Error::InvalidPolygon("self-intersecting ring".to_string()));
        }

        Ok(Self {
            vertices: points,
            normal,
            area: 0.5 * doubled_area,
        })
    }

    /// Ring vertices in their original order, without the closing duplicate
    pub fn vertices(&self) -> &[Point3<f64>] {
        &self.vertices
    }

    /// Unit normal of the ring plane
    pub fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Enclosed area
    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Geometry of a resolved entity
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Shape {
    Point(Point3<f64>),
    Polyline(Polyline),
    Polygon(Polygon),
}

impl Shape {
    /// Category name, used for logging
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Point(_) => "point",
            Shape::Polyline(_) => "polyline",
            Shape::Polygon(_) => "polygon",
        }
    }
}

/// A resolved `(identifier, geometry)` pair. Identifiers are never empty;
/// see [`crate::ident::display_identifier`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NamedGeometry {
    pub identifier: String,
    pub shape: Shape,
}

impl NamedGeometry {
    pub fn new(identifier: impl Into<String>, shape: Shape) -> Self {
        Self {
            identifier: identifier.into(),
            shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_polygon_square() {
        let polygon = Polygon::new(unit_square()).unwrap();
        assert_eq!(polygon.len(), 4);
        assert_relative_eq!(polygon.area(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(polygon.normal().z.abs(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polygon_accepts_closed_ring() {
        let mut points = unit_square();
        points.push(points[0]);
        let polygon = Polygon::new(points).unwrap();
        assert_eq!(polygon.len(), 4);
    }

    #[test]
    fn test_polygon_rejects_collinear() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
        ];
        assert!(matches!(
            Polygon::new(points),
            Err(Error::InvalidPolygon(_))
        ));
    }

    #[test]
    fn test_polygon_rejects_too_few_distinct() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
        ];
        assert!(matches!(
            Polygon::new(points),
            Err(Error::InvalidPolygon(_))
        ));
    }

    #[test]
    fn test_polygon_rejects_self_intersection() {
        // Asymmetric bow-tie with non-zero signed area
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(1.0, 3.0, 0.0),
            Point3::new(3.0, 2.0, 0.0),
        ];
        assert!(matches!(
            Polygon::new(points),
            Err(Error::InvalidPolygon(_))
        ));
    }

    #[test]
    fn test_polygon_in_tilted_plane() {
        // Triangle in a plane not aligned with any axis
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let polygon = Polygon::new(points).unwrap();
        assert!(polygon.area() > 0.0);
    }

    #[test]
    fn test_polyline_allows_degenerate_lengths() {
        assert!(Polyline::new(Vec::new()).is_empty());
        assert_eq!(Polyline::new(vec![Point3::origin()]).len(), 1);
    }
}
