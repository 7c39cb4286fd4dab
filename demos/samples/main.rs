//! Prints reports for a fixed set of sample curves.
//!
//! Usage:
//! ```text
//! cargo run --example samples
//! RUST_LOG=conic2d=debug cargo run --example samples
//! ```

use conic2d::{ConicVariant, CurveModel};

const SAMPLES: [(ConicVariant, [f64; 6]); 4] = [
    // x² + y² - 4x - 6y + 9 = 0
    (ConicVariant::Circle, [1.0, 0.0, 1.0, -4.0, -6.0, 9.0]),
    // y² - 4x = 0
    (ConicVariant::Parabola, [0.0, 0.0, 1.0, -4.0, 0.0, 0.0]),
    // 4x² + 9y² - 16x - 18y - 11 = 0
    (ConicVariant::Ellipse, [4.0, 0.0, 9.0, -16.0, -18.0, -11.0]),
    // x² - y² - 2x + 4y - 4 = 0
    (ConicVariant::Hyperbola, [1.0, 0.0, -1.0, -2.0, 4.0, -4.0]),
];

fn report(variant: ConicVariant, values: [f64; 6]) -> conic2d::Result<String> {
    CurveModel::from_array(variant, values)?.report()
}

fn main() {
    // Default: WARN for everything, INFO for conic2d.
    // Override with RUST_LOG env var (e.g. RUST_LOG=conic2d=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("conic2d=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    for (variant, values) in SAMPLES {
        match report(variant, values) {
            Ok(report) => println!("{report}"),
            Err(err) => println!("{}: error: {err}", variant.title()),
        }
    }
}
