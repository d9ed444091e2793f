//! Edge and vertex connectivity derived from the face list.
//!
//! Both structures here are pure functions of the current triangle list and
//! are rebuilt after every split pass, since splitting changes connectivity.
//! Neither holds a reference into the mesh it was built from.

use hashbrown::{HashMap, HashSet};

/// Canonical key for an unordered edge.
///
/// The sorted vertex pair is packed into a single `u64` (smaller index in
/// the high half), giving an allocation-free hashable key with a total
/// order that matches (min, max) lexicographic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(u64);

impl EdgeKey {
    /// Create the canonical key for the edge between two vertices.
    #[inline]
    pub fn new(v0: u32, v1: u32) -> Self {
        let (lo, hi) = if v0 < v1 { (v0, v1) } else { (v1, v0) };
        Self(((lo as u64) << 32) | hi as u64)
    }

    /// The smaller vertex index of the edge.
    #[inline]
    pub fn a(&self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// The larger vertex index of the edge.
    #[inline]
    pub fn b(&self) -> u32 {
        self.0 as u32
    }
}

/// Map from each unordered edge to the faces that reference it.
///
/// For a closed 2-manifold mesh every edge has exactly 2 incident faces.
/// A boundary edge has 1; more than 2 indicates non-manifold input, which
/// is tolerated and treated as boundary-like rather than rejected.
#[derive(Debug, Default)]
pub struct EdgeTable {
    edge_to_faces: HashMap<EdgeKey, Vec<u32>>,
}

impl EdgeTable {
    /// Build the edge table from a face list.
    ///
    /// Registers the three edges of every triangle. O(T) time and space;
    /// an empty face list yields an empty table.
    pub fn build(faces: &[[u32; 3]]) -> Self {
        let mut edge_to_faces: HashMap<EdgeKey, Vec<u32>> =
            HashMap::with_capacity(faces.len() * 3 / 2);

        for (face_index, face) in faces.iter().enumerate() {
            for i in 0..3 {
                let key = EdgeKey::new(face[i], face[(i + 1) % 3]);
                edge_to_faces
                    .entry(key)
                    .or_default()
                    .push(face_index as u32);
            }
        }

        Self { edge_to_faces }
    }

    /// Number of distinct edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_to_faces.len()
    }

    /// Iterate over all edges with their incident face indices.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, &[u32])> {
        self.edge_to_faces
            .iter()
            .map(|(&key, faces)| (key, faces.as_slice()))
    }

    /// Faces incident to an edge, or an empty slice if the edge is unknown.
    pub fn faces(&self, key: EdgeKey) -> &[u32] {
        self.edge_to_faces
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over boundary edges (exactly one incident face).
    pub fn boundary_edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edge_to_faces
            .iter()
            .filter(|(_, faces)| faces.len() == 1)
            .map(|(&key, _)| key)
    }

    /// Iterate over non-manifold edges (more than two incident faces).
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = (EdgeKey, usize)> + '_ {
        self.edge_to_faces
            .iter()
            .filter(|(_, faces)| faces.len() > 2)
            .map(|(&key, faces)| (key, faces.len()))
    }
}

/// Per-vertex 1-ring neighbor sets.
#[derive(Debug)]
pub struct VertexAdjacency {
    neighbors: Vec<HashSet<u32>>,
}

impl VertexAdjacency {
    /// Build adjacency sets from a face list.
    ///
    /// Each face contributes its three vertex pairs as mutual neighbors.
    /// Vertices referenced by no face keep an empty neighbor set.
    pub fn build(faces: &[[u32; 3]], vertex_count: usize) -> Self {
        let mut neighbors = vec![HashSet::new(); vertex_count];

        for face in faces {
            for i in 0..3 {
                let v0 = face[i] as usize;
                let v1 = face[(i + 1) % 3] as usize;
                // Degenerate faces can repeat an index; a vertex is never
                // its own neighbor.
                if v0 != v1 {
                    neighbors[v0].insert(v1 as u32);
                    neighbors[v1].insert(v0 as u32);
                }
            }
        }

        Self { neighbors }
    }

    /// Number of vertices covered by this adjacency.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Neighbor set of a vertex.
    #[inline]
    pub fn neighbors(&self, vertex: u32) -> &HashSet<u32> {
        &self.neighbors[vertex as usize]
    }

    /// Number of neighbors (valence) of a vertex.
    #[inline]
    pub fn valence(&self, vertex: u32) -> usize {
        self.neighbors[vertex as usize].len()
    }
}
