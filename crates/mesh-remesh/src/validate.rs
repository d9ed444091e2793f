//! Pre-mutation input validation.
//!
//! The remesh driver validates before it computes: a fatal problem in the
//! input surfaces as a `MeshError` while the caller's buffers are still
//! untouched. There is no collect-all mode here; the engine only needs the
//! first fatal issue.

use tracing::trace;

use crate::error::{MeshError, MeshResult};
use crate::types::Mesh;

/// Check that every face index is in range and every coordinate is finite.
///
/// Returns the first fatal issue found, or `Ok(())` for a structurally
/// sound mesh. An empty mesh is valid (remeshing it is the identity).
pub fn validate_mesh_strict(mesh: &Mesh) -> MeshResult<()> {
    let vertex_count = mesh.vertices.len();

    for (vertex_index, vertex) in mesh.vertices.iter().enumerate() {
        let p = &vertex.position;
        for (coordinate, value) in [("x", p.x), ("y", p.y), ("z", p.z)] {
            if !value.is_finite() {
                return Err(MeshError::invalid_coordinate(vertex_index, coordinate, value));
            }
        }
    }

    for (face_index, face) in mesh.faces.iter().enumerate() {
        for &vertex_index in face {
            if vertex_index as usize >= vertex_count {
                return Err(MeshError::invalid_vertex_index(
                    face_index,
                    vertex_index,
                    vertex_count,
                ));
            }
        }
    }

    trace!(
        vertices = vertex_count,
        faces = mesh.face_count(),
        "mesh validation passed"
    );

    Ok(())
}

/// Check remeshing parameters against their documented ranges.
pub fn validate_params(target_edge_length: f64, blend_factor: f64) -> MeshResult<()> {
    if !target_edge_length.is_finite() || target_edge_length <= 0.0 {
        return Err(MeshError::invalid_parameter(
            "target_edge_length",
            target_edge_length,
            "must be finite and > 0",
        ));
    }

    if !blend_factor.is_finite() || !(0.0..=1.0).contains(&blend_factor) {
        return Err(MeshError::invalid_parameter(
            "blend_factor",
            blend_factor,
            "must be in [0, 1]",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::types::Vertex;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.faces.push([0, 1, 2]);
        mesh
    }

    #[test]
    fn test_valid_mesh_passes() {
        assert!(validate_mesh_strict(&triangle_mesh()).is_ok());
    }

    #[test]
    fn test_empty_mesh_passes() {
        assert!(validate_mesh_strict(&Mesh::new()).is_ok());
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let mut mesh = triangle_mesh();
        mesh.faces.push([0, 1, 9]);

        let err = validate_mesh_strict(&mesh).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidVertexIndex);
    }

    #[test]
    fn test_nan_coordinate_rejected() {
        let mut mesh = triangle_mesh();
        mesh.vertices[1].position.y = f64::NAN;

        let err = validate_mesh_strict(&mesh).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCoordinate);
    }

    #[test]
    fn test_infinite_coordinate_rejected() {
        let mut mesh = triangle_mesh();
        mesh.vertices[2].position.z = f64::INFINITY;

        assert!(validate_mesh_strict(&mesh).is_err());
    }

    #[test]
    fn test_param_ranges() {
        assert!(validate_params(1.0, 0.5).is_ok());
        assert!(validate_params(1.0, 0.0).is_ok());
        assert!(validate_params(1.0, 1.0).is_ok());

        assert!(validate_params(0.0, 0.5).is_err());
        assert!(validate_params(-2.0, 0.5).is_err());
        assert!(validate_params(f64::NAN, 0.5).is_err());
        assert!(validate_params(1.0, -0.1).is_err());
        assert!(validate_params(1.0, 1.5).is_err());
        assert!(validate_params(1.0, f64::NAN).is_err());
    }
}
