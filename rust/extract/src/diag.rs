// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-entity diagnostics.
//!
//! Diagnostics are the side channel for soft failures: the batch records why
//! an entity was skipped and moves on. Callers may inspect or ignore them.

use crate::error::Error;
use std::fmt;

/// Reason code attached to a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Reason {
    MalformedCoordinate,
    MissingStructure,
    IndexOutOfRange,
    TooFewVertices,
    InvalidPolygon,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Reason::MalformedCoordinate => "MalformedCoordinate",
            Reason::MissingStructure => "MissingStructure",
            Reason::IndexOutOfRange => "IndexOutOfRange",
            Reason::TooFewVertices => "TooFewVertices",
            Reason::InvalidPolygon => "InvalidPolygon",
        };
        f.write_str(name)
    }
}

impl From<&Error> for Reason {
    fn from(error: &Error) -> Self {
        match error {
            Error::MalformedCoordinate(_) => Reason::MalformedCoordinate,
            // Dangling references surface while walking the boundary chain
            Error::MissingStructure(_) | Error::Model(_) => Reason::MissingStructure,
            Error::IndexOutOfRange { .. } => Reason::IndexOutOfRange,
            Error::TooFewVertices { .. } => Reason::TooFewVertices,
            Error::InvalidPolygon(_) => Reason::InvalidPolygon,
        }
    }
}

/// One skipped-entity record: which entity, why, and the specific detail
/// (offending index, broken link, ...).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    /// Display identifier of the owning entity
    pub entity: String,
    pub reason: Reason,
    pub detail: String,
}

impl Diagnostic {
    pub fn new(entity: impl Into<String>, reason: Reason, detail: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            reason,
            detail: detail.into(),
        }
    }

    /// Build a diagnostic from a resolver error, keeping the error message
    /// as the detail text.
    pub fn from_error(entity: impl Into<String>, error: &Error) -> Self {
        Self::new(entity, Reason::from(error), error.to_string())
    }
}
