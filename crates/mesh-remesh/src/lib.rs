//! Isotropic remeshing for indexed triangle meshes.
//!
//! This crate refines a triangle mesh toward a uniform target edge length
//! by iteratively splitting long edges at their midpoints and relaxing
//! vertex positions with Laplacian smoothing. It is the mesh-preparation
//! stage of a product-configuration pipeline: an upstream solid-modeling
//! step hands over a (near-)closed mesh, the remesher evens out its
//! tessellation, and the result flows on to rendering and export.
//!
//! # Pipeline
//!
//! Each iteration runs three stages over freshly built connectivity:
//!
//! 1. **Edge split**: every distinct edge longer than
//!    `target * max_edge_ratio` gains a midpoint vertex, and each affected
//!    face is re-triangulated through an exhaustive case table. Shared
//!    edges are measured and split exactly once, which keeps the mesh
//!    watertight.
//! 2. **Adjacency rebuild**: 1-ring neighbor sets are derived from the
//!    new face list.
//! 3. **Laplacian smoothing**: every vertex moves toward the centroid of
//!    its neighbors by `blend_factor`, computed simultaneously from a
//!    snapshot so the result does not depend on visitation order.
//!
//! After the final iteration, vertex normals are recomputed as the
//! area-weighted average of adjacent face normals.
//!
//! There is no collapse step: the mesh only refines, never coarsens.
//!
//! # Quick Start
//!
//! ```
//! use mesh_remesh::{Mesh, RemeshParams, Vertex};
//!
//! let mut mesh = Mesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(10.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(5.0, 8.66, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! let result = mesh.remesh_with_edge_length(2.0).unwrap();
//! println!(
//!     "remeshed from {} to {} triangles",
//!     result.original_triangles, result.final_triangles
//! );
//! ```
//!
//! # Interchange
//!
//! Collaborators on either side of the engine (solid provider, renderer,
//! exporter/uploader) speak flat buffers: N×3 position floats and 3×T
//! vertex indices. Use [`Mesh::from_buffers`] / [`Mesh::to_buffers`] /
//! [`Mesh::normal_buffer`] at those seams; this crate owns no file format.
//!
//! # Errors and Warnings
//!
//! Structural problems (out-of-range indices, non-finite coordinates,
//! out-of-range parameters) fail fast with a [`MeshError`] before any
//! buffer is touched. Degenerate geometry (zero-length edges, zero-area
//! faces) and non-manifold edges are tolerated: the engine substitutes a
//! well-defined zero contribution and reports each condition as a
//! [`GeometryWarning`] on the result.
//!
//! # Concurrency
//!
//! The engine is synchronous and single-threaded with no internal
//! suspension points. Interactive callers should run `remesh` off the
//! rendering thread and may pass a progress callback to cancel
//! cooperatively between iterations (see
//! [`remesh_isotropic_with_progress`]).

pub mod adjacency;
mod error;
pub mod normals;
pub mod progress;
pub mod remesh;
pub mod smooth;
pub mod split;
pub mod tracing_ext;
mod types;
pub mod validate;

// Re-export core types at crate root
pub use adjacency::{EdgeKey, EdgeTable, VertexAdjacency};
pub use error::{ErrorCode, GeometryWarning, MeshError, MeshResult, WarningSeverity};
pub use normals::compute_vertex_normals;
pub use progress::{Progress, ProgressCallback};
pub use remesh::{RemeshParams, RemeshResult, remesh_isotropic, remesh_isotropic_with_progress};
pub use smooth::smooth_positions;
pub use split::{SplitPass, split_long_edges};
pub use tracing_ext::{OperationTimer, log_mesh_stats};
pub use types::{Mesh, Triangle, Vertex};
pub use validate::{validate_mesh_strict, validate_params};

// Convenience methods on Mesh
impl Mesh {
    /// Remesh toward a uniform edge length using default parameters.
    ///
    /// For more control, use `remesh_with_params`.
    pub fn remesh_with_edge_length(&self, target_edge_length: f64) -> MeshResult<RemeshResult> {
        remesh::remesh_isotropic(
            self,
            &RemeshParams::with_target_edge_length(target_edge_length),
        )
    }

    /// Remesh with custom parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_remesh::{Mesh, RemeshParams, Vertex};
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
    /// mesh.vertices.push(Vertex::from_coords(10.0, 0.0, 0.0));
    /// mesh.vertices.push(Vertex::from_coords(5.0, 8.66, 0.0));
    /// mesh.faces.push([0, 1, 2]);
    ///
    /// let mut params = RemeshParams::with_target_edge_length(2.0);
    /// params.iterations = 2;
    /// let result = mesh.remesh_with_params(&params).unwrap();
    /// assert_eq!(result.iterations_performed, 2);
    /// ```
    pub fn remesh_with_params(&self, params: &RemeshParams) -> MeshResult<RemeshResult> {
        remesh::remesh_isotropic(self, params)
    }

    /// Validate the mesh, returning the first fatal issue if any.
    pub fn validate(&self) -> MeshResult<()> {
        validate::validate_mesh_strict(self)
    }

    /// Compute vertex normals from face normals (area-weighted average).
    ///
    /// Returns warnings for degenerate faces that contributed nothing.
    pub fn compute_normals(&mut self) -> Vec<GeometryWarning> {
        normals::compute_vertex_normals(self)
    }
}
