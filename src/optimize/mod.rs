pub mod axes;
pub mod grid;

pub use axes::{Axis, OptimizationAxes, OptimizationConstraints};
pub use grid::{optimize, score, OptimizationOutcome};
