// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate normalization: raw 2D/3D coordinate tuples to canonical
//! 3D points.

use crate::error::{Error, Result};
use ifc_prims_model::{AttrValue, Entity};
use nalgebra::Point3;

/// Normalize a raw coordinate sequence of length 2 or 3.
///
/// Two components promote to 3D with `z = 0`; extra components beyond the
/// third are ignored. Fewer than two components, or any non-numeric
/// component, is a `MalformedCoordinate` error — the caller decides whether
/// to skip the owning entity or propagate.
pub fn normalize_coordinates(raw: &[AttrValue]) -> Result<Point3<f64>> {
    if raw.len() < 2 {
        return Err(Error::MalformedCoordinate(format!(
            "expected at least 2 components, found {}",
            raw.len()
        )));
    }

    let component = |index: usize| -> Result<f64> {
        raw[index].as_float().ok_or_else(|| {
            Error::MalformedCoordinate(format!("component {index} is not numeric"))
        })
    };

    let x = component(0)?;
    let y = component(1)?;
    let z = if raw.len() > 2 { component(2)? } else { 0.0 };

    Ok(Point3::new(x, y, z))
}

/// Read and normalize a point entity's `Coordinates` attribute.
pub fn point_from_entity(entity: &Entity) -> Result<Point3<f64>> {
    let raw = entity.attr_list("Coordinates").ok_or_else(|| {
        Error::MalformedCoordinate(format!(
            "entity #{} has no Coordinates list",
            entity.id
        ))
    })?;
    normalize_coordinates(raw)
}
