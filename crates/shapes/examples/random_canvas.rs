//! Generate a batch of shapes from a narrow range and show what the canvas keeps.
//!
//! Usage:
//!   cargo run -p shapes --example random_canvas -- [seed]
//!
//! With dimensions limited to 1..=3 many descriptors repeat, so the canvas
//! visibly drops entries.

use shapes::api::{Canvas, FactoryParams, IdGen, ShapeFactory};
use std::sync::Arc;

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let params = FactoryParams {
        dim_min: 1,
        dim_max: 3,
    };
    let mut factory = ShapeFactory::new(params, seed)
        .unwrap()
        .with_ids(Arc::new(IdGen::new()));
    let canvas = Canvas::new(factory.generate(20));
    println!(
        "kept {} of 20 shapes ({} duplicates):",
        canvas.len(),
        canvas.rejected()
    );
    for shape in &canvas {
        println!("  {shape}");
    }
}
