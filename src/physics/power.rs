use crate::physics::environment::N_TO_GRAMS;

/// Electrical power draw, in watts, for one motor producing `thrust_g` grams
/// of thrust.
///
/// Induced-power proxy: P = T^1.5 / (eta * 10) with thrust in newtons. The
/// denominator stands in for sqrt(2 * rho * A) and is not dimensionally
/// rigorous; kept as-is so results stay comparable across versions.
pub fn power_consumption(thrust_g: f64, motor_efficiency: f64) -> f64 {
    let thrust_newtons = thrust_g / N_TO_GRAMS;
    thrust_newtons.powf(1.5) / (motor_efficiency * 10.0)
}

/// Hover endurance, in minutes, for a battery feeding a total electrical
/// load.
///
/// Zero or negative power maps to zero minutes rather than infinity.
pub fn flight_time_minutes(capacity_mah: f64, total_power_w: f64, voltage: f64) -> f64 {
    if total_power_w <= 0.0 {
        return 0.0;
    }
    let current_amps = total_power_w / voltage;
    let hours = (capacity_mah / 1000.0) / current_amps;
    hours * 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_power_zero_minutes() {
        assert_eq!(flight_time_minutes(5000.0, 0.0, 11.1), 0.0);
        assert_eq!(flight_time_minutes(20_000.0, -5.0, 22.2), 0.0);
    }

    #[test]
    fn flight_time_known_value() {
        // 100 W at 11.1 V draws 9.009 A; a 5 Ah pack lasts 33.3 min.
        let t = flight_time_minutes(5000.0, 100.0, 11.1);
        assert!((t - 33.3).abs() < 1e-9, "got {}", t);
    }

    #[test]
    fn flight_time_linear_in_capacity() {
        let t1 = flight_time_minutes(3000.0, 150.0, 11.1);
        let t2 = flight_time_minutes(6000.0, 150.0, 11.1);
        assert!((t2 / t1 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn power_grows_superlinearly_with_thrust() {
        let p1 = power_consumption(500.0, 0.85);
        let p2 = power_consumption(1000.0, 0.85);
        assert!(p2 > 2.0 * p1, "induced power should grow faster than thrust");
    }

    #[test]
    fn better_motor_draws_less() {
        let p_mediocre = power_consumption(800.0, 0.75);
        let p_good = power_consumption(800.0, 0.90);
        assert!(p_good < p_mediocre);
    }
}
