// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polyline assembler.

use crate::coords::point_from_entity;
use crate::error::Result;
use crate::ident::display_identifier;
use crate::primitive::{NamedGeometry, Polyline, Shape};
use ifc_prims_model::{Entity, EntityGraph};
use nalgebra::Point3;

/// Builds an ordered point sequence from a `Polyline` entity's `Points`
/// reference list.
///
/// Empty and single-point reference lists still produce a polyline; length
/// validation is deferred to consumers. A malformed or dangling point
/// reference fails the whole entity.
pub struct PolylineResolver;

impl PolylineResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, entity: &Entity, graph: &EntityGraph) -> Result<NamedGeometry> {
        let mut points: Vec<Point3<f64>> = Vec::new();

        if let Some(list) = entity.attr_list("Points") {
            points.reserve(list.len());
            for item in list {
                if let Some(point_entity) = graph.resolve_ref(item)? {
                    points.push(point_from_entity(point_entity)?);
                }
            }
        }

        Ok(NamedGeometry::new(
            display_identifier(entity),
            Shape::Polyline(Polyline::new(points)),
        ))
    }
}

impl Default for PolylineResolver {
    fn default() -> Self {
        Self::new()
    }
}
