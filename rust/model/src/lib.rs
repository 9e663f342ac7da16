// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Prims Entity Graph
//!
//! Loosely-typed, in-memory representation of a building-model entity graph.
//!
//! The graph is produced by an external model-loading collaborator and is
//! read-only from the moment [`GraphBuilder::build`] returns. Entities carry
//! named attributes and are queried through a uniform capability interface
//! ([`Entity::attr`]) instead of sourcetype-specific accessors, so the
//! extraction pipeline never needs to know which concrete schema produced
//! the data.
//!
//! ## Quick Start
//!
//! ```rust
//! use ifc_prims_model::{AttrValue, Entity, EntityKind, GraphBuilder};
//!
//! let graph = GraphBuilder::new()
//!     .add(
//!         Entity::new(1, EntityKind::CartesianPoint)
//!             .with_attr("Name", AttrValue::Text("Origin".into()))
//!             .with_attr(
//!                 "Coordinates",
//!                 AttrValue::List(vec![AttrValue::Float(0.0), AttrValue::Float(0.0)]),
//!             ),
//!     )
//!     .build();
//!
//! let point = graph.entity(1).unwrap();
//! assert_eq!(point.attr_text("Name"), Some("Origin"));
//! ```

pub mod attr;
pub mod entity;
pub mod error;
pub mod graph;

pub use attr::AttrValue;
pub use entity::{Entity, EntityKind};
pub use error::{Error, Result};
pub use graph::{EntityGraph, GraphBuilder};
