// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entities and entity kinds.

use crate::attr::AttrValue;
use rustc_hash::FxHashMap;

/// Kind of an entity, as classified by the external model loader.
///
/// Only the kinds the extraction pipeline scans or traverses are named;
/// everything else collapses into [`EntityKind::Other`] and is ignored
/// (unsupported kinds are never an error).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EntityKind {
    /// Standalone 3D (or 2D) point
    CartesianPoint,
    /// Ordered sequence of point references
    Polyline,
    /// Surface with an optional outer shell boundary
    Surface,
    /// Shell wrapping a list of faces
    ClosedShell,
    /// Face wrapping a list of bounds
    Face,
    /// Bound wrapping a boundary loop
    FaceBound,
    /// Ordered loop of point references
    PolyLoop,
    /// Shared vertex pool for indexed faces
    CartesianPointList,
    /// Face described by 1-based indices into the vertex pool
    IndexedFace,
    /// Any kind the pipeline does not handle
    Other,
}

impl EntityKind {
    /// Display name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::CartesianPoint => "CartesianPoint",
            EntityKind::Polyline => "Polyline",
            EntityKind::Surface => "Surface",
            EntityKind::ClosedShell => "ClosedShell",
            EntityKind::Face => "Face",
            EntityKind::FaceBound => "FaceBound",
            EntityKind::PolyLoop => "PolyLoop",
            EntityKind::CartesianPointList => "CartesianPointList",
            EntityKind::IndexedFace => "IndexedFace",
            EntityKind::Other => "Other",
        }
    }

    /// Classify a kind by its display name; unrecognized names map to `Other`
    pub fn from_name(name: &str) -> Self {
        match name {
            "CartesianPoint" => EntityKind::CartesianPoint,
            "Polyline" => EntityKind::Polyline,
            "Surface" => EntityKind::Surface,
            "ClosedShell" => EntityKind::ClosedShell,
            "Face" => EntityKind::Face,
            "FaceBound" => EntityKind::FaceBound,
            "PolyLoop" => EntityKind::PolyLoop,
            "CartesianPointList" => EntityKind::CartesianPointList,
            "IndexedFace" => EntityKind::IndexedFace,
            _ => EntityKind::Other,
        }
    }
}

/// A single entity: numeric id, kind, and named attributes.
///
/// Entities are opaque handles into the source graph; the pipeline never
/// mutates them after graph construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    attrs: FxHashMap<String, AttrValue>,
}

impl Entity {
    /// Create an entity with no attributes
    pub fn new(id: u32, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            attrs: FxHashMap::default(),
        }
    }

    /// Attach a named attribute (builder style, used during graph assembly)
    pub fn with_attr(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    /// Uniform capability query: look up an attribute by name.
    ///
    /// Null attributes are treated as absent, so callers never need to
    /// distinguish `Null` from a missing key.
    #[inline]
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name).filter(|value| !value.is_null())
    }

    /// Get string attribute
    pub fn attr_text(&self, name: &str) -> Option<&str> {
        self.attr(name).and_then(|v| v.as_text())
    }

    /// Get entity reference attribute
    pub fn attr_ref(&self, name: &str) -> Option<u32> {
        self.attr(name).and_then(|v| v.as_entity_ref())
    }

    /// Get list attribute
    pub fn attr_list(&self, name: &str) -> Option<&[AttrValue]> {
        self.attr(name).and_then(|v| v.as_list())
    }

    /// Get all entity references from a list attribute, skipping non-references
    pub fn attr_ref_list(&self, name: &str) -> Option<Vec<u32>> {
        let list = self.attr_list(name)?;
        Some(list.iter().filter_map(|v| v.as_entity_ref()).collect())
    }
}
