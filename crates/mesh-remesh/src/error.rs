//! Error types for remeshing operations.
//!
//! Fatal conditions are `MeshError` values with machine-readable codes and
//! are raised before any buffer is mutated. Non-fatal geometry conditions
//! (zero-length edges, zero-area faces) are `GeometryWarning` values: the
//! engine substitutes a well-defined zero contribution and reports the
//! condition to the caller instead of failing or producing NaN.
//!
//! # Error Codes
//!
//! Each error has a unique code in the format `MESH-XXXX`:
//! - `MESH-2xxx`: Validation errors (topology, coordinates)
//! - `MESH-4xxx`: Interface errors (buffers, parameters)

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for remeshing operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Machine-readable error codes for remeshing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// MESH-2001: Face references invalid vertex index
    InvalidVertexIndex = 2001,
    /// MESH-2002: Vertex has NaN or Infinity coordinate
    InvalidCoordinate = 2002,
    /// MESH-4001: Buffer length is not a multiple of 3
    InvalidBufferLength = 4001,
    /// MESH-4002: Parameter outside its valid range
    InvalidParameter = 4002,
}

impl ErrorCode {
    /// Returns the error code as a string in the format `MESH-XXXX`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidVertexIndex => "MESH-2001",
            ErrorCode::InvalidCoordinate => "MESH-2002",
            ErrorCode::InvalidBufferLength => "MESH-4001",
            ErrorCode::InvalidParameter => "MESH-4002",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during remeshing operations.
///
/// Every variant is raised by validation, before any computation touches
/// the mesh: the caller is never left with partially-updated buffers.
#[derive(Debug, Error, Diagnostic)]
pub enum MeshError {
    /// Invalid vertex index in face data.
    #[error(
        "invalid vertex index: face {face_index} references vertex {vertex_index}, but mesh only has {vertex_count} vertices"
    )]
    #[diagnostic(
        code(mesh::validation::vertex_index),
        help("Check the index buffer produced by the upstream solid provider.")
    )]
    InvalidVertexIndex {
        face_index: usize,
        vertex_index: u32,
        vertex_count: usize,
    },

    /// Invalid coordinate value (NaN or Infinity).
    #[error("invalid coordinate at vertex {vertex_index}: {coordinate} is {value}")]
    #[diagnostic(
        code(mesh::validation::coordinate),
        help(
            "Check for numerical issues in the source data. This often happens with very small or very large values."
        )
    )]
    InvalidCoordinate {
        vertex_index: usize,
        coordinate: &'static str,
        value: f64,
    },

    /// A flat interchange buffer has a length that is not a multiple of 3.
    #[error("{buffer} buffer length {length} is not a multiple of 3")]
    #[diagnostic(
        code(mesh::interface::buffer_length),
        help("Positions are N*3 floats and indices are T*3 integers; a ragged buffer usually means a truncated upload.")
    )]
    InvalidBufferLength { buffer: &'static str, length: usize },

    /// A remeshing parameter is outside its valid range.
    #[error("invalid parameter {parameter}: {value} ({constraint})")]
    #[diagnostic(
        code(mesh::interface::parameter),
        help("target_edge_length must be positive and finite; blend_factor must be in [0, 1].")
    )]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

impl MeshError {
    /// Returns the machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            MeshError::InvalidVertexIndex { .. } => ErrorCode::InvalidVertexIndex,
            MeshError::InvalidCoordinate { .. } => ErrorCode::InvalidCoordinate,
            MeshError::InvalidBufferLength { .. } => ErrorCode::InvalidBufferLength,
            MeshError::InvalidParameter { .. } => ErrorCode::InvalidParameter,
        }
    }

    // Constructor helpers for common error patterns

    /// Create an InvalidVertexIndex error.
    pub fn invalid_vertex_index(face_index: usize, vertex_index: u32, vertex_count: usize) -> Self {
        MeshError::InvalidVertexIndex {
            face_index,
            vertex_index,
            vertex_count,
        }
    }

    /// Create an InvalidCoordinate error.
    pub fn invalid_coordinate(vertex_index: usize, coordinate: &'static str, value: f64) -> Self {
        MeshError::InvalidCoordinate {
            vertex_index,
            coordinate,
            value,
        }
    }

    /// Create an InvalidBufferLength error.
    pub fn invalid_buffer_length(buffer: &'static str, length: usize) -> Self {
        MeshError::InvalidBufferLength { buffer, length }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(parameter: &'static str, value: f64, constraint: &'static str) -> Self {
        MeshError::InvalidParameter {
            parameter,
            value,
            constraint,
        }
    }
}

/// Non-fatal geometry conditions encountered during remeshing.
///
/// Unlike `MeshError`, these never abort the operation: the engine handles
/// each one with a well-defined zero contribution and collects the warning
/// for the caller's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryWarning {
    /// Edge whose endpoints are coincident (zero length). Skipped by the
    /// splitter since its length can never exceed the split threshold.
    ZeroLengthEdge { vertex_a: u32, vertex_b: u32 },
    /// Face with a zero-length cross product. Contributes a zero vector to
    /// vertex normal accumulation instead of NaN.
    ZeroAreaFace { face_index: usize },
    /// Edge shared by more than two faces. Tolerated: the splitter still
    /// splits it correctly for every incident face.
    NonManifoldEdge {
        vertex_a: u32,
        vertex_b: u32,
        face_count: usize,
    },
}

impl GeometryWarning {
    /// Returns a severity level for the warning.
    pub fn severity(&self) -> WarningSeverity {
        match self {
            GeometryWarning::ZeroLengthEdge { .. } => WarningSeverity::Degenerate,
            GeometryWarning::ZeroAreaFace { .. } => WarningSeverity::Degenerate,
            GeometryWarning::NonManifoldEdge { .. } => WarningSeverity::Topology,
        }
    }
}

/// Categories of non-fatal geometry warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    /// Degenerate geometry handled with a zero contribution.
    Degenerate,
    /// Unusual topology tolerated as boundary-like.
    Topology,
}

impl std::fmt::Display for GeometryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryWarning::ZeroLengthEdge { vertex_a, vertex_b } => {
                write!(
                    f,
                    "edge ({}, {}) has zero length (coincident vertices)",
                    vertex_a, vertex_b
                )
            }
            GeometryWarning::ZeroAreaFace { face_index } => {
                write!(f, "face {} has zero area", face_index)
            }
            GeometryWarning::NonManifoldEdge {
                vertex_a,
                vertex_b,
                face_count,
            } => {
                write!(
                    f,
                    "edge ({}, {}) is non-manifold (shared by {} faces)",
                    vertex_a, vertex_b, face_count
                )
            }
        }
    }
}
