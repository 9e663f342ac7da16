// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Prims Extraction Pipeline
//!
//! Extracts geometric primitives (points, polylines, planar boundaries,
//! indexed mesh faces) from an [`ifc_prims_model::EntityGraph`] and turns
//! them into validated geometry for downstream renderers and analysis tools.
//!
//! The pipeline is a single-pass batch transform: each primitive category is
//! scanned once, every entity is resolved independently, and malformed
//! entities are skipped with a [`Diagnostic`] instead of aborting the batch.
//! Entry point: [`extract_primitives`].

pub mod batch;
pub mod coords;
pub mod diag;
pub mod error;
pub mod ident;
pub mod primitive;
pub mod resolvers;
mod ring;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use batch::{extract_primitives, Extraction};
pub use coords::normalize_coordinates;
pub use diag::{Diagnostic, Reason};
pub use error::{Error, Result};
pub use ident::display_identifier;
pub use primitive::{NamedGeometry, Polygon, Polyline, Shape};
pub use resolvers::{
    BoundaryResolver, IndexedFaceResolver, PointResolver, PolylineResolver, VertexPool,
};
