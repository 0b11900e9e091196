/// affine3d Demo - Box and triangle mesh
///
/// Builds the demo shapes, computes their bounds and prints the values.
/// Set `RUST_LOG=debug` to see the construction steps.
use affine3d_demo::Report;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("building demo geometry");
    let report = Report::build();

    print!("{report}");
    info!(
        triangles = report.mesh.triangles.len(),
        "demo geometry ready"
    );
}
