//! Laplacian vertex relaxation.

use nalgebra::{Point3, Vector3};

use crate::adjacency::VertexAdjacency;
use crate::types::Mesh;

/// Relax every vertex toward the centroid of its 1-ring neighbors.
///
/// `new = old * (1 - blend) + centroid(neighbors_old) * blend`
///
/// The update is Jacobi-style: every centroid is computed from the
/// pre-smoothing snapshot, so the result is independent of vertex
/// visitation order. Vertices with no neighbors keep their position.
///
/// Returns the new position array; the input mesh is not mutated.
pub fn smooth_positions(
    mesh: &Mesh,
    adjacency: &VertexAdjacency,
    blend_factor: f64,
) -> Vec<Point3<f64>> {
    debug_assert_eq!(mesh.vertex_count(), adjacency.vertex_count());

    let snapshot: Vec<Point3<f64>> = mesh.vertices.iter().map(|v| v.position).collect();

    if blend_factor == 0.0 {
        return snapshot;
    }

    let mut relaxed = snapshot.clone();

    for (index, position) in snapshot.iter().enumerate() {
        let neighbors = adjacency.neighbors(index as u32);
        if neighbors.is_empty() {
            continue;
        }

        let mut centroid = Vector3::zeros();
        for &neighbor in neighbors {
            centroid += snapshot[neighbor as usize].coords;
        }
        centroid /= neighbors.len() as f64;

        relaxed[index] =
            Point3::from(position.coords * (1.0 - blend_factor) + centroid * blend_factor);
    }

    relaxed
}

/// Apply a smoothed position array to a mesh, producing a new mesh.
pub fn apply_positions(mesh: &Mesh, positions: Vec<Point3<f64>>) -> Mesh {
    debug_assert_eq!(mesh.vertex_count(), positions.len());

    let mut smoothed = mesh.clone();
    for (vertex, position) in smoothed.vertices.iter_mut().zip(positions) {
        vertex.position = position;
    }
    smoothed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Vertex;
    use approx::assert_relative_eq;

    fn fan_mesh() -> Mesh {
        // Center vertex 0 ringed by four neighbors on a unit square.
        Mesh {
            vertices: vec![
                Vertex::from_coords(0.25, 0.0, 0.0),
                Vertex::from_coords(1.0, 0.0, 0.0),
                Vertex::from_coords(0.0, 1.0, 0.0),
                Vertex::from_coords(-1.0, 0.0, 0.0),
                Vertex::from_coords(0.0, -1.0, 0.0),
            ],
            faces: vec![[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 1]],
        }
    }

    #[test]
    fn test_center_vertex_moves_toward_ring_centroid() {
        let mesh = fan_mesh();
        let adjacency = VertexAdjacency::build(&mesh.faces, mesh.vertex_count());

        let relaxed = smooth_positions(&mesh, &adjacency, 0.5);

        // Ring centroid is the origin; blend 0.5 halves the offset.
        assert_relative_eq!(relaxed[0].x, 0.125, epsilon = 1e-12);
        assert_relative_eq!(relaxed[0].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fixed_point_when_vertex_at_neighbor_centroid() {
        let mut mesh = fan_mesh();
        mesh.vertices[0] = Vertex::from_coords(0.0, 0.0, 0.0);
        let adjacency = VertexAdjacency::build(&mesh.faces, mesh.vertex_count());

        let relaxed = smooth_positions(&mesh, &adjacency, 0.5);
        assert_relative_eq!(relaxed[0].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(relaxed[0].y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(relaxed[0].z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_isolated_vertex_untouched() {
        let mut mesh = fan_mesh();
        mesh.vertices.push(Vertex::from_coords(9.0, 9.0, 9.0));
        let adjacency = VertexAdjacency::build(&mesh.faces, mesh.vertex_count());

        let relaxed = smooth_positions(&mesh, &adjacency, 0.5);
        assert_relative_eq!(relaxed[5].x, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_blend_is_identity() {
        let mesh = fan_mesh();
        let adjacency = VertexAdjacency::build(&mesh.faces, mesh.vertex_count());

        let relaxed = smooth_positions(&mesh, &adjacency, 0.0);
        for (vertex, relaxed_position) in mesh.vertices.iter().zip(&relaxed) {
            assert_relative_eq!(vertex.position.x, relaxed_position.x);
            assert_relative_eq!(vertex.position.y, relaxed_position.y);
        }
    }

    #[test]
    fn test_full_blend_lands_on_centroid() {
        let mesh = fan_mesh();
        let adjacency = VertexAdjacency::build(&mesh.faces, mesh.vertex_count());

        let relaxed = smooth_positions(&mesh, &adjacency, 1.0);
        assert_relative_eq!(relaxed[0].x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(relaxed[0].y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_input_mesh_untouched() {
        let mesh = fan_mesh();
        let adjacency = VertexAdjacency::build(&mesh.faces, mesh.vertex_count());

        let _ = smooth_positions(&mesh, &adjacency, 0.5);
        assert_relative_eq!(mesh.vertices[0].position.x, 0.25);
    }
}
