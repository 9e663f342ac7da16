// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Standalone point resolver.

use crate::coords::point_from_entity;
use crate::error::Result;
use crate::ident::display_identifier;
use crate::primitive::{NamedGeometry, Shape};
use ifc_prims_model::Entity;

/// Resolves a `CartesianPoint` entity into a named point.
pub struct PointResolver;

impl PointResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, entity: &Entity) -> Result<NamedGeometry> {
        let point = point_from_entity(entity)?;
        Ok(NamedGeometry::new(
            display_identifier(entity),
            Shape::Point(point),
        ))
    }
}

impl Default for PointResolver {
    fn default() -> Self {
        Self::new()
    }
}
