//! End-to-end remeshing demo on a coarse box.
//!
//! Run with: cargo run -p mesh-remesh --example remesh_block
//!
//! Set RUST_LOG=mesh_remesh=debug for per-iteration detail.

use mesh_remesh::{Mesh, ProgressCallback, RemeshParams, remesh_isotropic_with_progress};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// A 10 x 6 x 4 box tessellated with two triangles per side, the kind of
/// coarse mesh a solid-modeling step hands over.
fn build_block() -> Mesh {
    #[rustfmt::skip]
    let positions = [
         0.0, 0.0, 0.0,
        10.0, 0.0, 0.0,
        10.0, 6.0, 0.0,
         0.0, 6.0, 0.0,
         0.0, 0.0, 4.0,
        10.0, 0.0, 4.0,
        10.0, 6.0, 4.0,
         0.0, 6.0, 4.0,
    ];
    let indices = [
        0, 2, 1, 0, 3, 2, // bottom
        4, 5, 6, 4, 6, 7, // top
        0, 1, 5, 0, 5, 4, // front
        3, 7, 6, 3, 6, 2, // back
        0, 4, 7, 0, 7, 3, // left
        1, 2, 6, 1, 6, 5, // right
    ];

    Mesh::from_buffers(&positions, &indices).expect("static buffers are valid")
}

fn main() -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mesh = build_block();
    println!(
        "input: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.face_count()
    );

    let mut params = RemeshParams::with_target_edge_length(1.5);
    params.iterations = 4;

    let progress: ProgressCallback = Box::new(|progress| {
        println!(
            "  [{:>3}%] {} ({:.1?})",
            progress.percent(),
            progress.message,
            progress.elapsed
        );
        true
    });

    let result = remesh_isotropic_with_progress(&mesh, &params, Some(&progress))?;

    println!(
        "output: {} vertices, {} triangles ({} edges split over {} iterations)",
        result.final_vertices,
        result.final_triangles,
        result.edges_split,
        result.iterations_performed
    );
    for warning in &result.warnings {
        println!("warning: {warning}");
    }

    let (out_positions, out_indices) = result.mesh.to_buffers();
    let normals = result.mesh.normal_buffer();
    println!(
        "buffers for the renderer: {} position floats, {} indices, {} normal floats",
        out_positions.len(),
        out_indices.len(),
        normals.len()
    );

    Ok(())
}
