// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Batch extraction with parallel per-entity resolution.
//!
//! Scans the graph once per primitive category, resolves entities in
//! parallel, and merges results into one [`Extraction`]. Resolvers hold no
//! cross-entity mutable state, so parallelism is purely a performance
//! optimization; per-category output ordering always matches source
//! encounter order because results are collected through rayon's ordered
//! `collect` and merged after the parallel stage — no worker emits directly.

use crate::diag::Diagnostic;
use crate::ident::display_identifier;
use crate::primitive::NamedGeometry;
use crate::resolvers::{
    BoundaryResolver, IndexedFaceResolver, PointResolver, PolylineResolver, VertexPool,
};
use ifc_prims_model::{Entity, EntityGraph, EntityKind};
use rayon::prelude::*;

/// Output of one batch run: the four per-category collections, each in
/// source encounter order, plus the diagnostic side channel.
///
/// Categories stay separate because downstream consumers style them
/// differently. The whole result set is replaced on the next batch run.
#[derive(Debug, Default)]
pub struct Extraction {
    pub points: Vec<NamedGeometry>,
    pub polylines: Vec<NamedGeometry>,
    pub boundary_polygons: Vec<NamedGeometry>,
    pub face_polygons: Vec<NamedGeometry>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Total number of emitted geometries across all categories
    pub fn geometry_count(&self) -> usize {
        self.points.len()
            + self.polylines.len()
            + self.boundary_polygons.len()
            + self.face_polygons.len()
    }
}

/// Run the full pipeline over one batch.
///
/// Never fails: malformed entities are skipped and recorded in
/// [`Extraction::diagnostics`].
pub fn extract_primitives(graph: &EntityGraph) -> Extraction {
    let start = std::time::Instant::now();
    tracing::info!(entities = graph.len(), "Starting primitive extraction");

    let mut extraction = Extraction::default();

    extract_points(graph, &mut extraction);
    extract_polylines(graph, &mut extraction);
    extract_boundaries(graph, &mut extraction);
    extract_faces(graph, &mut extraction);

    tracing::info!(
        points = extraction.points.len(),
        polylines = extraction.polylines.len(),
        boundary_polygons = extraction.boundary_polygons.len(),
        face_polygons = extraction.face_polygons.len(),
        diagnostics = extraction.diagnostics.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Primitive extraction complete"
    );

    extraction
}

fn extract_points(graph: &EntityGraph, extraction: &mut Extraction) {
    let entities: Vec<&Entity> = graph.by_kind(EntityKind::CartesianPoint).collect();
    let resolver = PointResolver::new();

    let results: Vec<_> = entities
        .par_iter()
        .map(|entity| {
            resolver
                .resolve(entity)
                .map_err(|err| Diagnostic::from_error(display_identifier(entity), &err))
        })
        .collect();

    merge(results, &mut extraction.points, &mut extraction.diagnostics);
    tracing::debug!(
        scanned = entities.len(),
        emitted = extraction.points.len(),
        "Resolved points"
    );
}

fn extract_polylines(graph: &EntityGraph, extraction: &mut Extraction) {
    let entities: Vec<&Entity> = graph.by_kind(EntityKind::Polyline).collect();
    let resolver = PolylineResolver::new();

    let results: Vec<_> = entities
        .par_iter()
        .map(|entity| {
            resolver
                .resolve(entity, graph)
                .map_err(|err| Diagnostic::from_error(display_identifier(entity), &err))
        })
        .collect();

    merge(
        results,
        &mut extraction.polylines,
        &mut extraction.diagnostics,
    );
    tracing::debug!(
        scanned = entities.len(),
        emitted = extraction.polylines.len(),
        "Resolved polylines"
    );
}

fn extract_boundaries(graph: &EntityGraph, extraction: &mut Extraction) {
    let entities: Vec<&Entity> = graph.by_kind(EntityKind::Surface).collect();
    let resolver = BoundaryResolver::new();

    // Surfaces without an Outer shell resolve to Ok(None): skipped silently
    let results: Vec<_> = entities
        .par_iter()
        .map(|entity| {
            resolver
                .resolve(entity, graph)
                .map_err(|err| Diagnostic::from_error(display_identifier(entity), &err))
        })
        .collect();

    for result in results {
        match result {
            Ok(Some(geometry)) => extraction.boundary_polygons.push(geometry),
            Ok(None) => {}
            Err(diagnostic) => {
                tracing::debug!(
                    entity = %diagnostic.entity,
                    reason = %diagnostic.reason,
                    "Skipping surface"
                );
                extraction.diagnostics.push(diagnostic);
            }
        }
    }
    tracing::debug!(
        scanned = entities.len(),
        emitted = extraction.boundary_polygons.len(),
        "Resolved planar boundaries"
    );
}

fn extract_faces(graph: &EntityGraph, extraction: &mut Extraction) {
    // The pool is built once per batch; all face resolutions borrow it
    let Some(pool_entity) = graph.by_kind(EntityKind::CartesianPointList).next() else {
        tracing::debug!("No vertex pool in batch, skipping indexed faces");
        return;
    };

    let pool = match VertexPool::from_entity(pool_entity) {
        Ok(pool) => pool,
        Err(err) => {
            extraction
                .diagnostics
                .push(Diagnostic::from_error(display_identifier(pool_entity), &err));
            return;
        }
    };

    let entities: Vec<&Entity> = graph.by_kind(EntityKind::IndexedFace).collect();
    tracing::debug!(
        pool_size = pool.len(),
        faces = entities.len(),
        "Resolving indexed faces"
    );

    let resolver = IndexedFaceResolver::new();
    let outcomes: Vec<_> = entities
        .par_iter()
        .map(|entity| resolver.resolve(entity, &pool))
        .collect();

    for outcome in outcomes {
        if let Some(geometry) = outcome.geometry {
            extraction.face_polygons.push(geometry);
        }
        extraction.diagnostics.extend(outcome.diagnostics);
    }
    tracing::debug!(
        scanned = entities.len(),
        emitted = extraction.face_polygons.len(),
        "Resolved indexed faces"
    );
}

/// Split ordered per-entity results into the emitted list and the
/// diagnostic side channel.
fn merge(
    results: Vec<Result<NamedGeometry, Diagnostic>>,
    emitted: &mut Vec<NamedGeometry>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for result in results {
        match result {
            Ok(geometry) => emitted.push(geometry),
            Err(diagnostic) => {
                tracing::debug!(
                    entity = %diagnostic.entity,
                    reason = %diagnostic.reason,
                    "Skipping entity"
                );
                diagnostics.push(diagnostic);
            }
        }
    }
}
