//! Computes the coefficient field of a cage and prints a summary.
//!
//! Usage:
//! ```text
//! cargo run --example coef_dump                          # default 10x10 square
//! cargo run --example coef_dump -- 0,0 40,0 40,30 0,30   # custom cage
//! RUST_LOG=cagefield=debug cargo run --example coef_dump
//! ```

use cagefield::error::OperationError;
use cagefield::geometry::Cage;
use cagefield::math::Point2;
use cagefield::operations::CageCoefCalc;
use cagefield::Result;

fn parse_vertex(arg: &str) -> Result<Point2> {
    let invalid = || OperationError::InvalidInput(format!("expected x,y but got '{arg}'"));
    let (x, y) = arg.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    Ok(Point2::new(x, y))
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for cagefield.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("cagefield=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let vertices = if args.is_empty() {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]
    } else {
        args.iter()
            .map(|a| parse_vertex(a))
            .collect::<Result<Vec<_>>>()?
    };

    let cage = Cage::new(vertices)?;
    let calc = CageCoefCalc::new().with_cage(&cage);
    let format = calc.prepare()?;
    let region = calc.bounding_box()?;
    let field = calc.execute(region)?;

    println!(
        "cage: {} vertices{}, region {:?}, {} channels/pixel",
        cage.vertex_count(),
        if cage.was_reversed() { " (reversed)" } else { "" },
        region,
        format.channels()
    );

    let mut inside = 0usize;
    let mut min_sum = f64::INFINITY;
    let mut max_sum = f64::NEG_INFINITY;
    for (_, _, sample) in field.samples() {
        if sample.is_zero() {
            continue;
        }
        inside += 1;
        let sum = sample.vertex_sum();
        min_sum = min_sum.min(sum);
        max_sum = max_sum.max(sum);
    }
    println!("{inside} of {} pixels inside the cage", region.area());
    if inside > 0 {
        println!("vertex coefficient sum in [{min_sum:.6}, {max_sum:.6}]");
    }
    Ok(())
}
