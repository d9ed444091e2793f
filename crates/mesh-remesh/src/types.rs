//! Core mesh data types.

use nalgebra::{Point3, Vector3};

use crate::error::{MeshError, MeshResult};

/// A vertex in the mesh.
///
/// Vertices are identified solely by their index in the vertex array.
/// The normal is a derived attribute: the remesh driver recomputes it
/// after the final iteration, it is never carried through the pipeline.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Unit normal vector, computed from adjacent faces.
    pub normal: Option<Vector3<f64>>,
}

impl Vertex {
    /// Create a new vertex with only position set.
    #[inline]
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

/// A triangle mesh with indexed vertices and faces.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into the vertex array.
    /// Each face is [v0, v1, v2] with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Create a new empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Number of vertices in the mesh.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces (triangles) in the mesh.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if mesh is empty (no vertices or faces).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Compute the axis-aligned bounding box.
    /// Returns (min_corner, max_corner) or None if mesh is empty.
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut min = self.vertices[0].position;
        let mut max = self.vertices[0].position;

        for vertex in &self.vertices[1..] {
            let p = &vertex.position;
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }

    /// Iterate over triangles, yielding Triangle structs with actual vertex data.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }

    /// Get a specific triangle by face index.
    pub fn triangle(&self, face_idx: usize) -> Option<Triangle> {
        self.faces.get(face_idx).map(|&[i0, i1, i2]| Triangle {
            v0: self.vertices[i0 as usize].position,
            v1: self.vertices[i1 as usize].position,
            v2: self.vertices[i2 as usize].position,
        })
    }

    /// Build a mesh from flat position and index buffers.
    ///
    /// This is the interchange shape used by upstream solid providers and
    /// downstream renderer/export collaborators: `positions` holds N×3
    /// floats, `indices` holds 3×T vertex indices.
    ///
    /// # Errors
    ///
    /// - `InvalidBufferLength` if either buffer length is not a multiple of 3
    /// - `InvalidVertexIndex` if an index references a missing vertex
    pub fn from_buffers(positions: &[f64], indices: &[u32]) -> MeshResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(MeshError::invalid_buffer_length(
                "positions",
                positions.len(),
            ));
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::invalid_buffer_length("indices", indices.len()));
        }

        let vertex_count = positions.len() / 3;
        let mut mesh = Mesh::with_capacity(vertex_count, indices.len() / 3);

        for chunk in positions.chunks_exact(3) {
            mesh.vertices
                .push(Vertex::from_coords(chunk[0], chunk[1], chunk[2]));
        }

        for (face_index, chunk) in indices.chunks_exact(3).enumerate() {
            for &index in chunk {
                if index as usize >= vertex_count {
                    return Err(MeshError::invalid_vertex_index(
                        face_index,
                        index,
                        vertex_count,
                    ));
                }
            }
            mesh.faces.push([chunk[0], chunk[1], chunk[2]]);
        }

        Ok(mesh)
    }

    /// Flatten the mesh back into position and index buffers.
    ///
    /// The returned buffers have the same shape `from_buffers` accepts.
    pub fn to_buffers(&self) -> (Vec<f64>, Vec<u32>) {
        let mut positions = Vec::with_capacity(self.vertices.len() * 3);
        for vertex in &self.vertices {
            positions.push(vertex.position.x);
            positions.push(vertex.position.y);
            positions.push(vertex.position.z);
        }

        let mut indices = Vec::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            indices.extend_from_slice(face);
        }

        (positions, indices)
    }

    /// Flatten vertex normals into an N×3 buffer for the renderer.
    ///
    /// Vertices without a computed normal contribute a zero vector.
    pub fn normal_buffer(&self) -> Vec<f64> {
        let mut normals = Vec::with_capacity(self.vertices.len() * 3);
        for vertex in &self.vertices {
            let n = vertex.normal.unwrap_or_else(Vector3::zeros);
            normals.push(n.x);
            normals.push(n.y);
            normals.push(n.z);
        }
        normals
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// A triangle with concrete vertex positions.
///
/// Utility type for geometric calculations. Winding is counter-clockwise
/// when viewed from the front (normal points toward viewer).
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Point3<f64>,
    pub v1: Point3<f64>,
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    pub fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Compute the (unnormalized) face normal via cross product.
    /// The direction follows the right-hand rule with CCW winding.
    #[inline]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Compute the unit face normal.
    /// Returns None for degenerate triangles (zero area).
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len_sq = n.norm_squared();
        if len_sq > f64::EPSILON {
            Some(n / len_sq.sqrt())
        } else {
            None
        }
    }

    /// Compute the area of the triangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Compute the lengths of the three edges.
    /// Returns [len01, len12, len20] where lenXY is the distance from vX to vY.
    #[inline]
    pub fn edge_lengths(&self) -> [f64; 3] {
        [
            (self.v1 - self.v0).norm(),
            (self.v2 - self.v1).norm(),
            (self.v0 - self.v2).norm(),
        ]
    }

    /// Get the length of the longest edge.
    #[inline]
    pub fn max_edge_length(&self) -> f64 {
        let lengths = self.edge_lengths();
        lengths[0].max(lengths[1]).max(lengths[2])
    }
}
