// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar boundary resolver.
//!
//! Walks the nested boundary representation of a surface entity:
//! `Outer` shell → first face → first bound → boundary loop → ordered
//! point references. Only the first face and first bound are consulted
//! (single simple boundary assumption).

use crate::coords::point_from_entity;
use crate::error::{Error, Result};
use crate::ident::display_identifier;
use crate::primitive::{NamedGeometry, Polygon, Shape};
use ifc_prims_model::{AttrValue, Entity, EntityGraph};
use nalgebra::Point3;

/// Resolves a `Surface` entity's outer boundary into a polygon.
pub struct BoundaryResolver;

impl BoundaryResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve one surface entity.
    ///
    /// Returns `Ok(None)` when the entity has no `Outer` attribute — such
    /// entities are skipped without a diagnostic. Any missing link further
    /// down the chain is a `MissingStructure` error; the caller records it
    /// and continues with the next entity.
    pub fn resolve(
        &self,
        entity: &Entity,
        graph: &EntityGraph,
    ) -> Result<Option<NamedGeometry>> {
        let Some(outer) = entity.attr("Outer") else {
            return Ok(None);
        };

        let shell = graph
            .resolve_ref(outer)?
            .ok_or_else(|| Error::MissingStructure("Outer is not an entity reference".into()))?;

        let faces = shell
            .attr_list("CfsFaces")
            .ok_or_else(|| Error::MissingStructure("shell has no CfsFaces list".into()))?;
        let face = self.first_entity(faces, graph, "shell has no faces")?;

        let bounds = face
            .attr_list("Bounds")
            .ok_or_else(|| Error::MissingStructure("face has no Bounds list".into()))?;
        let bound = self.first_entity(bounds, graph, "face has no bounds")?;

        let loop_entity = graph
            .resolve_ref(
                bound
                    .attr("Bound")
                    .ok_or_else(|| Error::MissingStructure("bound has no Bound loop".into()))?,
            )?
            .ok_or_else(|| Error::MissingStructure("Bound is not an entity reference".into()))?;

        let point_refs = loop_entity
            .attr_list("Points")
            .ok_or_else(|| Error::MissingStructure("loop has no Points list".into()))?;

        let mut points: Vec<Point3<f64>> = Vec::with_capacity(point_refs.len());
        for item in point_refs {
            let point_entity = graph.resolve_ref(item)?.ok_or_else(|| {
                Error::MissingStructure("loop Points entry is not an entity reference".into())
            })?;
            points.push(point_from_entity(point_entity)?);
        }

        let polygon = Polygon::new(points)?;
        Ok(Some(NamedGeometry::new(
            display_identifier(entity),
            Shape::Polygon(polygon),
        )))
    }

    /// Resolve the first reference of a wrapper list, per the single simple
    /// boundary assumption.
    fn first_entity<'g>(
        &self,
        list: &[AttrValue],
        graph: &'g EntityGraph,
        missing: &str,
    ) -> Result<&'g Entity> {
        let first = list
            .first()
            .ok_or_else(|| Error::MissingStructure(missing.into()))?;
        graph
            .resolve_ref(first)?
            .ok_or_else(|| Error::MissingStructure(format!("{missing} (not a reference)")))
    }
}

impl Default for BoundaryResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ifc_prims_model::{EntityKind, GraphBuilder};

    fn point_entity(id: u32, x: f64, y: f64, z: f64) -> Entity {
        Entity::new(id, EntityKind::CartesianPoint).with_attr(
            "Coordinates",
            AttrValue::List(vec![
                AttrValue::Float(x),
                AttrValue::Float(y),
                AttrValue::Float(z),
            ]),
        )
    }

    fn ref_list(ids: &[u32]) -> AttrValue {
        AttrValue::List(ids.iter().map(|&id| AttrValue::EntityRef(id)).collect())
    }

    /// Surface #1 → shell #2 → face #3 → bound #4 → loop #5 → points 6..=9
    fn boundary_graph() -> EntityGraph {
        GraphBuilder::new()
            .add(
                Entity::new(1, EntityKind::Surface)
                    .with_attr("Name", AttrValue::Text("Wall-A".into()))
                    .with_attr("Outer", AttrValue::EntityRef(2)),
            )
            .add(Entity::new(2, EntityKind::ClosedShell).with_attr("CfsFaces", ref_list(&[3])))
            .add(Entity::new(3, EntityKind::Face).with_attr("Bounds", ref_list(&[4])))
            .add(Entity::new(4, EntityKind::FaceBound).with_attr("Bound", AttrValue::EntityRef(5)))
            .add(
                Entity::new(5, EntityKind::PolyLoop)
                    .with_attr("Points", ref_list(&[6, 7, 8, 9])),
            )
            .add(point_entity(6, 0.0, 0.0, 0.0))
            .add(point_entity(7, 4.0, 0.0, 0.0))
            .add(point_entity(8, 4.0, 0.0, 3.0))
            .add(point_entity(9, 0.0, 0.0, 3.0))
            .build()
    }

    #[test]
    fn test_full_chain_resolves() {
        let graph = boundary_graph();
        let surface = graph.entity(1).unwrap();
        let geometry = BoundaryResolver::new()
            .resolve(surface, &graph)
            .unwrap()
            .expect("surface has an outer shell");

        assert_eq!(geometry.identifier, "Wall-A");
        match geometry.shape {
            Shape::Polygon(polygon) => assert_eq!(polygon.len(), 4),
            other => panic!("Expected polygon, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_missing_outer_is_silent_skip() {
        let graph = GraphBuilder::new()
            .add(Entity::new(1, EntityKind::Surface))
            .build();
        let surface = graph.entity(1).unwrap();
        let result = BoundaryResolver::new().resolve(surface, &graph).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_empty_face_list_is_missing_structure() {
        let graph = GraphBuilder::new()
            .add(Entity::new(1, EntityKind::Surface).with_attr("Outer", AttrValue::EntityRef(2)))
            .add(Entity::new(2, EntityKind::ClosedShell).with_attr("CfsFaces", ref_list(&[])))
            .build();
        let surface = graph.entity(1).unwrap();
        assert!(matches!(
            BoundaryResolver::new().resolve(surface, &graph),
            Err(Error::MissingStructure(_))
        ));
    }

    #[test]
    fn test_dangling_shell_reference_is_an_error() {
        let graph = GraphBuilder::new()
            .add(Entity::new(1, EntityKind::Surface).with_attr("Outer", AttrValue::EntityRef(42)))
            .build();
        let surface = graph.entity(1).unwrap();
        assert!(BoundaryResolver::new().resolve(surface, &graph).is_err());
    }

    #[test]
    fn test_only_first_face_and_bound_consulted() {
        // Second face is broken, but it must never be visited
        let graph = GraphBuilder::new()
            .add(Entity::new(1, EntityKind::Surface).with_attr("Outer", AttrValue::EntityRef(2)))
            .add(
                Entity::new(2, EntityKind::ClosedShell).with_attr("CfsFaces", ref_list(&[3, 99])),
            )
            .add(Entity::new(3, EntityKind::Face).with_attr("Bounds", ref_list(&[4])))
            .add(Entity::new(4, EntityKind::FaceBound).with_attr("Bound", AttrValue::EntityRef(5)))
            .add(
                Entity::new(5, EntityKind::PolyLoop)
                    .with_attr("Points", ref_list(&[6, 7, 8])),
            )
            .add(point_entity(6, 0.0, 0.0, 0.0))
            .add(point_entity(7, 1.0, 0.0, 0.0))
            .add(point_entity(8, 0.0, 1.0, 0.0))
            .build();

        let surface = graph.entity(1).unwrap();
        let geometry = BoundaryResolver::new().resolve(surface, &graph).unwrap();
        assert!(geometry.is_some());
    }
}
