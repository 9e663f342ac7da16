// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a single entity.
///
/// All variants are per-entity and locally recoverable: the owning entity is
/// skipped and a diagnostic recorded, the batch always completes.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed coordinate: {0}")]
    MalformedCoordinate(String),

    #[error("Missing boundary structure: {0}")]
    MissingStructure(String),

    #[error("Index {index} outside vertex pool of {pool_len} points")]
    IndexOutOfRange { index: i64, pool_len: usize },

    #[error("Resolved only {found} vertices, need at least 3")]
    TooFewVertices { found: usize },

    #[error("Invalid polygon: {0}")]
    InvalidPolygon(String),

    #[error("Entity graph error: {0}")]
    Model(#[from] ifc_prims_model::Error),
}
