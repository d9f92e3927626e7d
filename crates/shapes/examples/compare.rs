//! Prints the optimal container for a volume and cross-checks each shape
//! numerically.
//!
//! ```sh
//! cargo run -p tincan-shapes --example compare -- 1000
//! RUST_LOG=tincan=trace cargo run -p tincan-shapes --example compare
//! ```

use std::error::Error;

use tincan_shapes::{
    BoxKind, CylinderKind, CylinderOptimizer, RectangularBoxOptimizer, compare_shapes,
};
use tracing_subscriber::{EnvFilter, fmt::SubscriberBuilder};

fn main() -> Result<(), Box<dyn Error>> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let volume = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<f64>()?,
        None => 1000.0,
    };

    let comparison = compare_shapes(volume)?;
    println!("{}", serde_json::to_string_pretty(&comparison)?);

    let (label, best) = comparison.best();
    println!("least material: {label} ({:.2})", best.surface_area);

    for kind in [CylinderKind::Closed, CylinderKind::Open] {
        let opt = CylinderOptimizer::new(volume, kind)?;
        let exact = opt.analytical_solution();
        let found = opt.numerical_solution()?;
        println!(
            "cylinder {kind:?}: analytical r={:.4} h={:.4}, numerical r={:.4} h={:.4}",
            exact.radius, exact.height, found.radius, found.height
        );
    }

    for kind in [BoxKind::OpenTop, BoxKind::Closed] {
        let opt = RectangularBoxOptimizer::new(volume, kind)?;
        let exact = opt.analytical_solution();
        let found = opt.numerical_solution()?;
        println!(
            "box {kind:?}: analytical {:.4}x{:.4}x{:.4}, numerical {:.4}x{:.4}x{:.4}",
            exact.length, exact.width, exact.height, found.length, found.width, found.height
        );
    }

    Ok(())
}
