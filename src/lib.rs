pub mod physics;
pub mod vehicle;
pub mod perf;
pub mod optimize;
pub mod report;
pub mod sweep;

// Flat re-exports so front ends can pull everything from one place
pub mod types {
    pub use crate::optimize::{
        Axis, OptimizationAxes, OptimizationConstraints, OptimizationOutcome,
    };
    pub use crate::perf::{evaluate, EnduranceRating, PerformanceResult, TwrRating};
    pub use crate::physics::environment::{Environment, AIR_DENSITY_SEA_LEVEL, G0};
    pub use crate::vehicle::{
        BatterySpec, FrameSpec, MotorSpec, PayloadSpec, PropellerSpec, VehicleBuilder,
        VehicleConfiguration,
    };
}
