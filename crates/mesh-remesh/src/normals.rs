//! Vertex normal recomputation.

use nalgebra::Vector3;
use tracing::debug;

use crate::error::GeometryWarning;
use crate::types::{Mesh, Triangle};

/// Recompute per-vertex normals as the area-weighted average of adjacent
/// face normals.
///
/// The unnormalized cross product (length = 2·area) is accumulated per
/// vertex, so larger faces weigh more. Degenerate faces with a zero-length
/// cross product contribute a zero vector, never a NaN; each one is
/// reported as a `ZeroAreaFace` warning. Vertices with no non-degenerate
/// adjacent face end up with `normal = None`.
pub fn compute_vertex_normals(mesh: &mut Mesh) -> Vec<GeometryWarning> {
    for vertex in &mut mesh.vertices {
        vertex.normal = None;
    }

    let mut warnings = Vec::new();
    let mut accumulated: Vec<Vector3<f64>> = vec![Vector3::zeros(); mesh.vertices.len()];

    for (face_index, face) in mesh.faces.iter().enumerate() {
        let tri = Triangle::new(
            mesh.vertices[face[0] as usize].position,
            mesh.vertices[face[1] as usize].position,
            mesh.vertices[face[2] as usize].position,
        );

        let weighted_normal = tri.normal_unnormalized();
        if weighted_normal.norm_squared() <= f64::EPSILON {
            warnings.push(GeometryWarning::ZeroAreaFace { face_index });
            continue;
        }

        accumulated[face[0] as usize] += weighted_normal;
        accumulated[face[1] as usize] += weighted_normal;
        accumulated[face[2] as usize] += weighted_normal;
    }

    for (index, accum) in accumulated.into_iter().enumerate() {
        let len_sq = accum.norm_squared();
        if len_sq > f64::EPSILON {
            mesh.vertices[index].normal = Some(accum / len_sq.sqrt());
        }
    }

    debug!(
        vertices = mesh.vertex_count(),
        degenerate_faces = warnings.len(),
        "recomputed vertex normals"
    );

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vertex;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_triangle_normal() {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.faces.push([0, 1, 2]);

        let warnings = compute_vertex_normals(&mut mesh);
        assert!(warnings.is_empty());

        for vertex in &mesh.vertices {
            let n = vertex.normal.expect("normal computed");
            assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_face_contributes_zero_not_nan() {
        let mut mesh = Mesh::new();
        // Good triangle plus a collinear one sharing vertex 0.
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(2.0, 0.0, 0.0));
        mesh.faces.push([0, 1, 2]);
        mesh.faces.push([0, 1, 3]);

        let warnings = compute_vertex_normals(&mut mesh);
        assert_eq!(warnings.len(), 1);
        assert!(matches!(
            warnings[0],
            GeometryWarning::ZeroAreaFace { face_index: 1 }
        ));

        let n = mesh.vertices[0].normal.expect("normal from good face");
        assert!(n.iter().all(|c| c.is_finite()));
        assert_relative_eq!(n.z, 1.0, epsilon = 1e-12);

        // Vertex 3 only touches the degenerate face.
        assert!(mesh.vertices[3].normal.is_none());
    }

    #[test]
    fn test_area_weighting_favors_larger_face() {
        let mut mesh = Mesh::new();
        // Vertex 0 shared by a small face in the XY plane and a face in
        // the XZ plane that is 100x larger.
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.1, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 0.1, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, -1.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.faces.push([0, 1, 2]);
        mesh.faces.push([0, 3, 4]);

        compute_vertex_normals(&mut mesh);

        let n = mesh.vertices[0].normal.expect("normal computed");
        // The large XZ face (normal along -Y) dominates the small +Z face.
        assert!(n.y.abs() > n.z.abs());
    }
}
