pub mod components;
pub mod config;

pub use components::{BatterySpec, FrameSpec, MotorSpec, PayloadSpec, PropellerSpec};
pub use config::{presets, VehicleBuilder, VehicleConfiguration};
