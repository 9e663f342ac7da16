// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-category resolvers.
//!
//! One resolver per primitive category, each stateless and independent of
//! the others:
//!
//! - `points`: standalone cartesian points
//! - `polyline`: ordered point-reference sequences
//! - `boundary`: shell → face → bound → loop planar boundaries
//! - `faces`: indexed faces against the shared vertex pool

mod boundary;
mod faces;
mod points;
mod polyline;

pub use boundary::BoundaryResolver;
pub use faces::{FaceOutcome, IndexedFaceResolver, VertexPool};
pub use points::PointResolver;
pub use polyline::PolylineResolver;
