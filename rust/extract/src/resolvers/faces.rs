// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indexed face resolver.
//!
//! Reconciles a shared, globally indexed vertex pool with per-face index
//! lists of unknown validity. Source indices are 1-based; the pool is built
//! once per batch and shared read-only across all face resolutions. One
//! malformed face never blocks any other face.

use crate::coords::normalize_coordinates;
use crate::diag::Diagnostic;
use crate::error::{Error, Result};
use crate::ident::display_identifier;
use crate::primitive::{NamedGeometry, Polygon, Shape};
use ifc_prims_model::Entity;
use nalgebra::Point3;
use smallvec::SmallVec;

/// Shared vertex pool: an ordered sequence of 3D points referenced by
/// 1-based position from indexed faces.
pub struct VertexPool {
    points: Vec<Point3<f64>>,
}

impl VertexPool {
    /// Build the pool from a `CartesianPointList` entity's `CoordList`.
    ///
    /// Any malformed row fails the whole pool rather than silently shifting
    /// the positions of every row after it.
    pub fn from_entity(entity: &Entity) -> Result<Self> {
        let rows = entity.attr_list("CoordList").ok_or_else(|| {
            Error::MalformedCoordinate(format!("entity #{} has no CoordList", entity.id))
        })?;

        let mut points = Vec::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let raw = row.as_list().ok_or_else(|| {
                Error::MalformedCoordinate(format!("CoordList row {row_index} is not a list"))
            })?;
            points.push(normalize_coordinates(raw)?);
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Resolve a 1-based source index against the pool.
    pub fn resolve_index(&self, index: i64) -> Result<Point3<f64>> {
        if index >= 1 && (index as usize) <= self.points.len() {
            Ok(self.points[index as usize - 1])
        } else {
            Err(Error::IndexOutOfRange {
                index,
                pool_len: self.points.len(),
            })
        }
    }
}

/// Result of resolving one face: the geometry (if the face survived
/// validation) plus every diagnostic attributable to it.
pub struct FaceOutcome {
    pub geometry: Option<NamedGeometry>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves an `IndexedFace` entity's `CoordIndex` list against the shared
/// vertex pool, then validates the resulting polygon.
pub struct IndexedFaceResolver;

impl IndexedFaceResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve one face.
    ///
    /// Out-of-range indices are dropped with a diagnostic, not fatal to the
    /// face; fewer than 3 surviving points, or a polygon that fails
    /// validation, rejects the face (nothing emitted) with a diagnostic.
    pub fn resolve(&self, entity: &Entity, pool: &VertexPool) -> FaceOutcome {
        let identifier = display_identifier(entity);
        let mut diagnostics = Vec::new();

        let indices: SmallVec<[i64; 8]> = entity
            .attr_list("CoordIndex")
            .map(|list| list.iter().filter_map(|v| v.as_int()).collect())
            .unwrap_or_default();

        // Most faces have 3-8 vertices
        let mut candidates: SmallVec<[Point3<f64>; 8]> = SmallVec::new();
        for &index in &indices {
            match pool.resolve_index(index) {
                Ok(point) => candidates.push(point),
                Err(err) => diagnostics.push(Diagnostic::from_error(&identifier, &err)),
            }
        }

        if candidates.len() < 3 {
            diagnostics.push(Diagnostic::from_error(
                &identifier,
                &Error::TooFewVertices {
                    found: candidates.len(),
                },
            ));
            return FaceOutcome {
                geometry: None,
                diagnostics,
            };
        }

        // Index order is semantically meaningful: construct in given order
        match Polygon::new(candidates.into_vec()) {
            Ok(polygon) => FaceOutcome {
                geometry: Some(NamedGeometry::new(identifier, Shape::Polygon(polygon))),
                diagnostics,
            },
            Err(err) => {
                diagnostics.push(Diagnostic::from_error(&identifier, &err));
                FaceOutcome {
                    geometry: None,
                    diagnostics,
                }
            }
        }
    }
}

impl Default for IndexedFaceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::Reason;
    use ifc_prims_model::{AttrValue, EntityKind};

    fn pool_of_four() -> VertexPool {
        let coords = [
            (0.0, 0.0, 0.0),
            (1.0, 0.0, 0.0),
            (1.0, 1.0, 0.0),
            (0.0, 1.0, 0.0),
        ];
        let rows = coords
            .iter()
            .map(|&(x, y, z)| {
                AttrValue::List(vec![
                    AttrValue::Float(x),
                    AttrValue::Float(y),
                    AttrValue::Float(z),
                ])
            })
            .collect();
        let entity = Entity::new(1, EntityKind::CartesianPointList)
            .with_attr("CoordList", AttrValue::List(rows));
        VertexPool::from_entity(&entity).unwrap()
    }

    fn face_entity(id: u32, indices: &[i64]) -> Entity {
        Entity::new(id, EntityKind::IndexedFace).with_attr(
            "CoordIndex",
            AttrValue::List(indices.iter().map(|&i| AttrValue::Integer(i)).collect()),
        )
    }

    #[test]
    fn test_in_range_indices_resolve_in_order() {
        let pool = pool_of_four();
        let outcome = IndexedFaceResolver::new().resolve(&face_entity(10, &[1, 2, 3]), &pool);
        assert!(outcome.diagnostics.is_empty());
        let geometry = outcome.geometry.expect("valid triangle");
        match geometry.shape {
            Shape::Polygon(polygon) => {
                assert_eq!(polygon.vertices()[0], Point3::new(0.0, 0.0, 0.0));
                assert_eq!(polygon.vertices()[2], Point3::new(1.0, 1.0, 0.0));
            }
            other => panic!("Expected polygon, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_out_of_range_index_dropped_then_too_few() {
        let pool = pool_of_four();
        let outcome = IndexedFaceResolver::new().resolve(&face_entity(10, &[1, 2, 5]), &pool);

        assert!(outcome.geometry.is_none());
        assert_eq!(outcome.diagnostics.len(), 2);
        assert_eq!(outcome.diagnostics[0].reason, Reason::IndexOutOfRange);
        assert!(outcome.diagnostics[0].detail.contains('5'));
        assert_eq!(outcome.diagnostics[1].reason, Reason::TooFewVertices);
    }

    #[test]
    fn test_zero_index_is_out_of_range() {
        // Source indices are 1-based; 0 must never alias the last entry
        let pool = pool_of_four();
        let outcome = IndexedFaceResolver::new().resolve(&face_entity(10, &[0, 1, 2, 3]), &pool);
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].reason, Reason::IndexOutOfRange);
        assert!(outcome.geometry.is_some());
    }

    #[test]
    fn test_collinear_face_rejected() {
        let coords = [(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0)];
        let rows = coords
            .iter()
            .map(|&(x, y, z)| {
                AttrValue::List(vec![
                    AttrValue::Float(x),
                    AttrValue::Float(y),
                    AttrValue::Float(z),
                ])
            })
            .collect();
        let entity = Entity::new(1, EntityKind::CartesianPointList)
            .with_attr("CoordList", AttrValue::List(rows));
        let pool = VertexPool::from_entity(&entity).unwrap();

        let outcome = IndexedFaceResolver::new().resolve(&face_entity(10, &[1, 2, 3]), &pool);
        assert!(outcome.geometry.is_none());
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].reason, Reason::InvalidPolygon);
    }

    #[test]
    fn test_missing_index_list_is_too_few() {
        let pool = pool_of_four();
        let entity = Entity::new(10, EntityKind::IndexedFace);
        let outcome = IndexedFaceResolver::new().resolve(&entity, &pool);
        assert!(outcome.geometry.is_none());
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].reason, Reason::TooFewVertices);
    }

    #[test]
    fn test_pool_rejects_malformed_row() {
        let rows = AttrValue::List(vec![
            AttrValue::List(vec![AttrValue::Float(0.0), AttrValue::Float(0.0)]),
            AttrValue::List(vec![AttrValue::Float(1.0)]),
        ]);
        let entity =
            Entity::new(1, EntityKind::CartesianPointList).with_attr("CoordList", rows);
        assert!(matches!(
            VertexPool::from_entity(&entity),
            Err(Error::MalformedCoordinate(_))
        ));
    }

    #[test]
    fn test_two_component_pool_rows_promote() {
        let rows = AttrValue::List(vec![AttrValue::List(vec![
            AttrValue::Float(2.0),
            AttrValue::Float(3.0),
        ])]);
        let entity =
            Entity::new(1, EntityKind::CartesianPointList).with_attr("CoordList", rows);
        let pool = VertexPool::from_entity(&entity).unwrap();
        assert_eq!(pool.resolve_index(1).unwrap(), Point3::new(2.0, 3.0, 0.0));
    }
}
