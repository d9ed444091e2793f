//! Isotropic remeshing driver.
//!
//! Refines a mesh toward a uniform target edge length by iterating
//! (split long edges → rebuild adjacency → Laplacian smoothing), then
//! recomputes vertex normals. There is no collapse step: the mesh only
//! refines, never coarsens, so the triangle count is monotonically
//! non-decreasing across iterations.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::adjacency::VertexAdjacency;
use crate::error::{GeometryWarning, MeshResult};
use crate::normals::compute_vertex_normals;
use crate::progress::{Progress, ProgressCallback};
use crate::smooth::{apply_positions, smooth_positions};
use crate::split::split_long_edges;
use crate::types::Mesh;
use crate::validate::{validate_mesh_strict, validate_params};
use crate::{mesh_span, tracing_ext::OperationTimer};

/// Parameters for isotropic remeshing.
#[derive(Debug, Clone)]
pub struct RemeshParams {
    /// Target edge length for the remeshed output. Must be finite and
    /// positive; all edges tend toward this length.
    pub target_edge_length: f64,

    /// Number of remeshing iterations. `0` returns the input unchanged.
    /// Default: 3
    pub iterations: usize,

    /// Laplacian smoothing blend (0 = no smoothing, 1 = move fully onto
    /// the neighbor centroid). Must be in [0, 1]. Default: 0.5
    pub blend_factor: f64,

    /// Lower edge-length bound as a fraction of target. Accepted for
    /// symmetry with a future edge-collapse step; the current pipeline
    /// only splits against the upper bound. Default: 0.8
    pub min_edge_ratio: f64,

    /// Upper edge-length bound as a fraction of target. Edges longer than
    /// `target * max_edge_ratio` are split. Default: 1.33
    pub max_edge_ratio: f64,
}

impl Default for RemeshParams {
    fn default() -> Self {
        Self {
            target_edge_length: 1.0,
            iterations: 3,
            blend_factor: 0.5,
            min_edge_ratio: 0.8,
            max_edge_ratio: 1.33,
        }
    }
}

impl RemeshParams {
    /// Create params with a specific target edge length.
    pub fn with_target_edge_length(target: f64) -> Self {
        Self {
            target_edge_length: target,
            ..Default::default()
        }
    }

    /// Create params for high-quality remeshing (more iterations).
    pub fn high_quality() -> Self {
        Self {
            iterations: 6,
            blend_factor: 0.7,
            ..Default::default()
        }
    }

    /// Create params for fast remeshing (a single pass).
    pub fn fast() -> Self {
        Self {
            iterations: 1,
            ..Default::default()
        }
    }
}

/// Result of isotropic remeshing.
#[derive(Debug)]
pub struct RemeshResult {
    /// The remeshed output mesh, with recomputed vertex normals.
    pub mesh: Mesh,
    /// Original triangle count.
    pub original_triangles: usize,
    /// Final triangle count.
    pub final_triangles: usize,
    /// Original vertex count.
    pub original_vertices: usize,
    /// Final vertex count.
    pub final_vertices: usize,
    /// Number of iterations performed. Less than requested only when a
    /// progress callback requested cancellation.
    pub iterations_performed: usize,
    /// Whether a progress callback cancelled the run early.
    pub cancelled: bool,
    /// Total number of distinct edges split.
    pub edges_split: usize,
    /// Non-fatal geometry conditions observed during the run.
    pub warnings: Vec<GeometryWarning>,
}

/// Perform isotropic remeshing on a mesh.
///
/// Each iteration splits every edge longer than
/// `target_edge_length * max_edge_ratio` at its midpoint (shared edges are
/// split exactly once, keeping the mesh watertight), rebuilds vertex
/// adjacency, and relaxes every vertex toward its 1-ring centroid with a
/// Jacobi-style simultaneous update. After the last iteration, vertex
/// normals are recomputed as the area-weighted average of face normals.
///
/// The input mesh is never mutated; the result owns fresh buffers.
///
/// # Errors
///
/// Fails before any computation if a face references a missing vertex, a
/// coordinate is NaN/infinite, or a parameter is out of range.
///
/// # Example
/// ```
/// use mesh_remesh::{Mesh, RemeshParams, Vertex, remesh_isotropic};
///
/// let mut mesh = Mesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(10.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(5.0, 8.66, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// let result = remesh_isotropic(&mesh, &RemeshParams::with_target_edge_length(2.0)).unwrap();
/// assert!(result.final_triangles > result.original_triangles);
/// ```
pub fn remesh_isotropic(mesh: &Mesh, params: &RemeshParams) -> MeshResult<RemeshResult> {
    remesh_isotropic_with_progress(mesh, params, None)
}

/// Perform isotropic remeshing with optional progress reporting.
///
/// The callback is invoked once per completed iteration. Returning `false`
/// requests cooperative cancellation: the driver stops before the next
/// iteration, finalizes normals over the work done so far, and reports the
/// truncated `iterations_performed` with `cancelled = true`. In-flight
/// iteration work is never interrupted.
pub fn remesh_isotropic_with_progress(
    mesh: &Mesh,
    params: &RemeshParams,
    progress: Option<&ProgressCallback>,
) -> MeshResult<RemeshResult> {
    validate_params(params.target_edge_length, params.blend_factor)?;
    validate_mesh_strict(mesh)?;

    let _timer = OperationTimer::with_context("remesh_isotropic", mesh.face_count(), mesh.vertex_count());
    let span = mesh_span!("remesh", mesh, target = params.target_edge_length);
    let _guard = span.enter();

    let original_triangles = mesh.face_count();
    let original_vertices = mesh.vertex_count();

    let min_length = params.target_edge_length * params.min_edge_ratio;
    let max_length = params.target_edge_length * params.max_edge_ratio;

    let start = Instant::now();
    let mut current = mesh.clone();
    let mut total_splits = 0;
    let mut warnings: Vec<GeometryWarning> = Vec::new();
    let mut iterations_performed = 0;
    let mut cancelled = false;

    for iteration in 0..params.iterations {
        let pass = split_long_edges(&current, min_length, max_length);
        total_splits += pass.edges_split;
        warnings.extend(pass.warnings.iter().cloned());
        current = pass.mesh;

        // Connectivity changed; the 1-ring sets must be rebuilt before
        // smoothing sees the midpoint vertices.
        let adjacency = VertexAdjacency::build(&current.faces, current.vertex_count());
        let relaxed = smooth_positions(&current, &adjacency, params.blend_factor);
        current = apply_positions(&current, relaxed);

        iterations_performed = iteration + 1;
        debug!(
            iteration,
            edges_split = pass.edges_split,
            did_split = pass.did_split,
            faces = current.face_count(),
            "remesh iteration complete"
        );

        if let Some(callback) = progress {
            let report = Progress::new(
                iterations_performed as u64,
                params.iterations as u64,
                format!("remesh iteration {}/{}", iterations_performed, params.iterations),
            )
            .with_elapsed(start.elapsed());

            if !callback(&report) {
                info!(iteration, "remesh cancelled by progress callback");
                cancelled = true;
                break;
            }
        }
    }

    warnings.extend(compute_vertex_normals(&mut current));

    for warning in &warnings {
        warn!(target: "mesh_remesh::geometry", %warning, "geometry warning");
    }

    info!(
        original_faces = original_triangles,
        final_faces = current.face_count(),
        edges_split = total_splits,
        iterations = iterations_performed,
        cancelled,
        "remesh complete"
    );

    Ok(RemeshResult {
        original_triangles,
        final_triangles: current.face_count(),
        original_vertices,
        final_vertices: current.vertex_count(),
        mesh: current,
        iterations_performed,
        cancelled,
        edges_split: total_splits,
        warnings,
    })
}
