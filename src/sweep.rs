use crate::perf::evaluate;
use crate::physics::environment::Environment;
use crate::physics::{power, rotor};
use crate::vehicle::VehicleConfiguration;

// ---------------------------------------------------------------------------
// Sampled one-parameter sweeps backing the diagnostic plots
// ---------------------------------------------------------------------------

/// Samples per sweep.
pub const SAMPLES: usize = 50;

fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| start + step * i as f64)
}

/// Static thrust of the configured propeller across 1000-8000 RPM.
pub fn thrust_vs_rpm(env: &Environment, config: &VehicleConfiguration) -> Vec<[f64; 2]> {
    linspace(1000.0, 8000.0, SAMPLES)
        .map(|rpm| {
            let thrust = rotor::propeller_thrust(
                env,
                config.propeller.diameter_in,
                config.propeller.pitch_in,
                rpm,
                config.propeller.efficiency,
            );
            [rpm, thrust]
        })
        .collect()
}

/// Per-motor power draw across a 100-2000 g thrust range.
pub fn power_vs_thrust(config: &VehicleConfiguration) -> Vec<[f64; 2]> {
    linspace(100.0, 2000.0, SAMPLES)
        .map(|thrust_g| {
            [
                thrust_g,
                power::power_consumption(thrust_g, config.motor.efficiency),
            ]
        })
        .collect()
}

/// Endurance across a 1-10 Ah capacity range at the configuration's
/// operating power.
pub fn flight_time_vs_capacity(env: &Environment, config: &VehicleConfiguration) -> Vec<[f64; 2]> {
    let operating_power = evaluate(env, config).total_power_w;
    linspace(1000.0, 10_000.0, SAMPLES)
        .map(|capacity| {
            [
                capacity,
                power::flight_time_minutes(capacity, operating_power, config.battery.voltage_v),
            ]
        })
        .collect()
}

/// TWR across a 6-15 inch propeller diameter range, all else per the
/// configuration.
pub fn twr_vs_diameter(env: &Environment, config: &VehicleConfiguration) -> Vec<[f64; 2]> {
    linspace(6.0, 15.0, SAMPLES)
        .map(|diameter| {
            let mut candidate = config.clone();
            candidate.propeller.diameter_in = diameter;
            [diameter, evaluate(env, &candidate).twr]
        })
        .collect()
}
