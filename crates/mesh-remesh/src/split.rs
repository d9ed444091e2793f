//! Long-edge splitting with consistent re-triangulation.
//!
//! One split pass measures every distinct edge once through the edge table,
//! inserts a midpoint vertex for each edge above the upper length bound, and
//! re-triangulates every affected face. Because shared edges are keyed
//! canonically, both incident faces of a split edge reuse the same midpoint
//! vertex and the mesh stays watertight.

use hashbrown::HashMap;
use nalgebra::Point3;
use tracing::debug;

use crate::adjacency::{EdgeKey, EdgeTable};
use crate::error::GeometryWarning;
use crate::types::{Mesh, Vertex};

/// Output of one long-edge splitting pass.
#[derive(Debug)]
pub struct SplitPass {
    /// The re-triangulated mesh. Input vertices keep their indices;
    /// midpoint vertices are appended after them.
    pub mesh: Mesh,
    /// Whether any edge was split. `false` means the output is an
    /// unmodified copy of the input.
    pub did_split: bool,
    /// Number of distinct edges split (equals the number of new vertices).
    pub edges_split: usize,
    /// Non-fatal geometry conditions observed during the pass.
    pub warnings: Vec<GeometryWarning>,
}

/// Which subset of a face's edges {e01, e12, e20} was split this pass.
///
/// Making the case table a tagged variant keeps it exhaustive: every face
/// is classified once and handled by exactly one emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitPattern {
    /// No edge split; the face passes through unchanged.
    Unsplit,
    /// One edge split. `corner` is the face-local index of the split
    /// edge's first vertex (0 for e01, 1 for e12, 2 for e20).
    One { corner: usize, midpoint: u32 },
    /// Two edges split. `unsplit_corner` is the face-local index of the
    /// first vertex of the surviving edge; `midpoints` are the midpoints
    /// of the next two edges in winding order.
    Two {
        unsplit_corner: usize,
        midpoints: [u32; 2],
    },
    /// All three edges split: three corner faces plus one center face.
    Three { midpoints: [u32; 3] },
}

impl SplitPattern {
    /// Classify a face from the per-edge midpoint lookups
    /// `[m01, m12, m20]`.
    fn classify(midpoints: [Option<u32>; 3]) -> Self {
        match midpoints {
            [None, None, None] => Self::Unsplit,
            [Some(m), None, None] => Self::One {
                corner: 0,
                midpoint: m,
            },
            [None, Some(m), None] => Self::One {
                corner: 1,
                midpoint: m,
            },
            [None, None, Some(m)] => Self::One {
                corner: 2,
                midpoint: m,
            },
            [None, Some(m0), Some(m1)] => Self::Two {
                unsplit_corner: 0,
                midpoints: [m0, m1],
            },
            [Some(m1), None, Some(m0)] => Self::Two {
                unsplit_corner: 1,
                midpoints: [m0, m1],
            },
            [Some(m0), Some(m1), None] => Self::Two {
                unsplit_corner: 2,
                midpoints: [m0, m1],
            },
            [Some(m01), Some(m12), Some(m20)] => Self::Three {
                midpoints: [m01, m12, m20],
            },
        }
    }

    /// Emit the sub-faces for this pattern, preserving the parent's
    /// winding orientation.
    fn emit(&self, face: [u32; 3], out: &mut Vec<[u32; 3]>) {
        match *self {
            Self::Unsplit => out.push(face),
            Self::One { corner, midpoint } => {
                let v0 = face[corner];
                let v1 = face[(corner + 1) % 3];
                let v2 = face[(corner + 2) % 3];

                out.push([v0, midpoint, v2]);
                out.push([midpoint, v1, v2]);
            }
            Self::Two {
                unsplit_corner,
                midpoints: [m0, m1],
            } => {
                // m0 bisects (v1, v2), m1 bisects (v2, v0); the surviving
                // edge (v0, v1) stays intact on the first sub-face.
                let v0 = face[unsplit_corner];
                let v1 = face[(unsplit_corner + 1) % 3];
                let v2 = face[(unsplit_corner + 2) % 3];

                out.push([v0, v1, m0]);
                out.push([v0, m0, m1]);
                out.push([m0, v2, m1]);
            }
            Self::Three {
                midpoints: [m01, m12, m20],
            } => {
                out.push([face[0], m01, m20]);
                out.push([m01, face[1], m12]);
                out.push([m20, m12, face[2]]);
                out.push([m01, m12, m20]);
            }
        }
    }

    /// Number of sub-faces this pattern emits.
    fn face_count(&self) -> usize {
        match self {
            Self::Unsplit => 1,
            Self::One { .. } => 2,
            Self::Two { .. } => 3,
            Self::Three { .. } => 4,
        }
    }
}

/// Split every edge longer than `max_length`, re-triangulating incident
/// faces consistently.
///
/// `_min_length` is accepted for symmetry with a future edge-collapse step
/// and is deliberately unused: this pass only refines, never coarsens.
///
/// The input mesh is not mutated; the returned mesh owns fresh buffers.
/// When no edge exceeds the bound the pass is a no-op (`did_split = false`)
/// and the output is an unmodified copy of the input.
pub fn split_long_edges(mesh: &Mesh, _min_length: f64, max_length: f64) -> SplitPass {
    let table = EdgeTable::build(&mesh.faces);

    let mut warnings: Vec<GeometryWarning> = table
        .non_manifold_edges()
        .map(|(key, face_count)| GeometryWarning::NonManifoldEdge {
            vertex_a: key.a(),
            vertex_b: key.b(),
            face_count,
        })
        .collect();

    // Deterministic midpoint ordering regardless of hash iteration order.
    let mut edges: Vec<EdgeKey> = table.iter().map(|(key, _)| key).collect();
    edges.sort_unstable();

    // First pass: measure each distinct edge once and record midpoints.
    let mut vertices = mesh.vertices.clone();
    let mut midpoints: HashMap<EdgeKey, u32> = HashMap::new();

    for key in edges {
        let p0 = &mesh.vertices[key.a() as usize].position;
        let p1 = &mesh.vertices[key.b() as usize].position;
        let length = (p1 - p0).norm();

        if length == 0.0 {
            // Coincident endpoints: can never exceed the bound, and the
            // comparison below needs no division, so just report it.
            warnings.push(GeometryWarning::ZeroLengthEdge {
                vertex_a: key.a(),
                vertex_b: key.b(),
            });
            continue;
        }

        if length > max_length {
            let midpoint = Point3::from((p0.coords + p1.coords) * 0.5);
            let new_index = vertices.len() as u32;
            vertices.push(Vertex::new(midpoint));
            midpoints.insert(key, new_index);
        }
    }

    if midpoints.is_empty() {
        return SplitPass {
            mesh: mesh.clone(),
            did_split: false,
            edges_split: 0,
            warnings,
        };
    }

    // Second pass: re-triangulate every face through the case table.
    let mut faces: Vec<[u32; 3]> = Vec::with_capacity(mesh.faces.len() + midpoints.len() * 2);

    for &face in &mesh.faces {
        let lookup = [
            midpoints.get(&EdgeKey::new(face[0], face[1])).copied(),
            midpoints.get(&EdgeKey::new(face[1], face[2])).copied(),
            midpoints.get(&EdgeKey::new(face[2], face[0])).copied(),
        ];

        SplitPattern::classify(lookup).emit(face, &mut faces);
    }

    let edges_split = midpoints.len();
    debug!(
        edges_split,
        new_faces = faces.len(),
        old_faces = mesh.face_count(),
        "split pass complete"
    );

    SplitPass {
        mesh: Mesh { vertices, faces },
        did_split: true,
        edges_split,
        warnings,
    }
}
