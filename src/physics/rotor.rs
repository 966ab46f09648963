use std::f64::consts::PI;

use crate::physics::environment::{Environment, IN_TO_M, N_TO_GRAMS};

/// Static thrust estimate for a propeller, in grams-force.
///
/// Momentum-theory style estimate: T = Ct * rho * A * V_tip^2, with the
/// thrust coefficient derated linearly by the pitch/diameter advance ratio.
/// Order-of-magnitude accuracy only; blade count and planform are ignored.
pub fn propeller_thrust(
    env: &Environment,
    diameter_in: f64,
    pitch_in: f64,
    rpm: f64,
    efficiency: f64,
) -> f64 {
    let diameter_m = diameter_in * IN_TO_M;
    let pitch_m = pitch_in * IN_TO_M;

    // Advance per revolution over tip advance; reduces to pitch/diameter.
    // Defined as zero for a stopped rotor.
    let advance_ratio = if rpm > 0.0 {
        (rpm * pitch_m / 60.0) / (rpm * diameter_m / 60.0)
    } else {
        0.0
    };

    let disk_area = PI * (diameter_m / 2.0).powi(2);
    let tip_speed = (rpm / 60.0) * PI * diameter_m;

    let thrust_coeff = (0.1 * (1.0 - advance_ratio) * efficiency).max(0.0);

    let thrust_newtons = thrust_coeff * env.air_density * disk_area * tip_speed.powi(2);
    (thrust_newtons * N_TO_GRAMS).max(0.0)
}
