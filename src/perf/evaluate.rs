use crate::physics::environment::Environment;
use crate::physics::{motor, power, rotor};
use crate::vehicle::config::VehicleConfiguration;

// ---------------------------------------------------------------------------
// Whole-vehicle performance evaluation
// ---------------------------------------------------------------------------

/// Derived performance metrics for one vehicle configuration.
///
/// Always recomputed from a `VehicleConfiguration`, never updated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceResult {
    pub total_weight_g: f64,
    pub total_thrust_g: f64,
    pub twr: f64,
    pub total_power_w: f64,
    pub flight_time_min: f64,
    pub max_payload_g: f64,
}

/// Evaluate one configuration into its performance metrics.
///
/// Pure function of its inputs; the optimizer calls it once per grid point
/// with no shared state.
pub fn evaluate(env: &Environment, config: &VehicleConfiguration) -> PerformanceResult {
    let motors = f64::from(config.motor.count);

    // Unloaded RPM at pack voltage; no load-current derating at this level.
    let rpm = motor::motor_rpm(config.battery.voltage_v, config.motor.kv, 0.0);

    let thrust_per_motor = rotor::propeller_thrust(
        env,
        config.propeller.diameter_in,
        config.propeller.pitch_in,
        rpm,
        config.propeller.efficiency,
    );
    let total_thrust_g = thrust_per_motor * motors;

    let total_weight_g = config.total_weight_g();
    let twr = if total_weight_g > 0.0 {
        total_thrust_g / total_weight_g
    } else {
        0.0
    };

    let power_per_motor = power::power_consumption(thrust_per_motor, config.motor.efficiency);
    let total_power_w = power_per_motor * motors;

    let flight_time_min = power::flight_time_minutes(
        config.battery.capacity_mah,
        total_power_w,
        config.battery.voltage_v,
    );

    // Load margin left before the vehicle drops to TWR 2.0, net of payload
    // already on board.
    let max_payload_g =
        (total_thrust_g / 2.0 - (total_weight_g - config.payload.additional_g)).max(0.0);

    PerformanceResult {
        total_weight_g,
        total_thrust_g,
        twr,
        total_power_w,
        flight_time_min,
        max_payload_g,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::components::{BatterySpec, MotorSpec};
    use crate::vehicle::config::{presets, VehicleBuilder};

    #[test]
    fn reference_quad_regression() {
        let env = Environment::default();
        let quad = presets::reference_quad();
        let r = evaluate(&env, &quad);

        // kv 1000 on 11.1 V
        assert_eq!(r.total_weight_g, 980.0);
        assert!((r.total_thrust_g - 24_276.67).abs() < 0.01, "thrust {}", r.total_thrust_g);
        assert!((r.twr - 24.7721).abs() < 1e-3, "twr {}", r.twr);
        assert!((r.total_power_w - 216.086).abs() < 1e-2, "power {}", r.total_power_w);
        assert!((r.flight_time_min - 15.4105).abs() < 1e-3, "time {}", r.flight_time_min);
        assert!((r.max_payload_g - 11_158.34).abs() < 0.01, "payload {}", r.max_payload_g);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let env = Environment::default();
        let quad = presets::reference_quad();
        assert_eq!(evaluate(&env, &quad), evaluate(&env, &quad));
    }

    #[test]
    fn zero_voltage_degenerates_to_zero_metrics() {
        let env = Environment::default();
        let dead = VehicleBuilder::new("Dead Pack")
            .battery(BatterySpec { voltage_v: 0.0, ..BatterySpec::default() })
            .build();
        let r = evaluate(&env, &dead);
        assert_eq!(r.total_thrust_g, 0.0);
        assert_eq!(r.twr, 0.0);
        assert_eq!(r.total_power_w, 0.0);
        assert_eq!(r.flight_time_min, 0.0);
    }

    #[test]
    fn zero_motors_degenerates_without_panicking() {
        let env = Environment::default();
        let inert = VehicleBuilder::new("No Motors")
            .motor(MotorSpec { count: 0, ..MotorSpec::default() })
            .build();
        let r = evaluate(&env, &inert);
        assert_eq!(r.total_thrust_g, 0.0);
        assert_eq!(r.twr, 0.0);
        assert_eq!(r.total_power_w, 0.0);
        assert_eq!(r.flight_time_min, 0.0);
        assert!(r.total_weight_g > 0.0);
    }

    #[test]
    fn payload_margin_clamps_at_zero() {
        // Tiny prop on a heavy airframe: thrust/2 falls short of the weight.
        let env = Environment::default();
        let brick = VehicleBuilder::new("Brick")
            .motor(MotorSpec { kv: 200.0, ..MotorSpec::default() })
            .build();
        let r = evaluate(&env, &brick);
        assert_eq!(r.max_payload_g, 0.0);
    }
}
