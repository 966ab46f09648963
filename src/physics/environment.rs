// ---------------------------------------------------------------------------
// Physical constants and ambient environment
// ---------------------------------------------------------------------------

/// Sea-level standard air density, kg/m^3.
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225;

/// Gravitational acceleration, m/s^2. Not consumed by the current formulas;
/// kept alongside air density so the environment carries both ambient terms.
pub const G0: f64 = 9.81;

/// Inches to meters.
pub const IN_TO_M: f64 = 0.0254;

/// Newtons to grams-force.
pub const N_TO_GRAMS: f64 = 101.97;

/// Ambient conditions the thrust model runs in.
///
/// Passed explicitly into the physics functions instead of living in shared
/// state, so every evaluation is a pure function of its arguments.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    pub air_density: f64, // kg/m^3
    pub gravity: f64,     // m/s^2
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            air_density: AIR_DENSITY_SEA_LEVEL,
            gravity: G0,
        }
    }
}

impl Environment {
    /// Sea-level gravity with a caller-chosen air density (altitude or
    /// hot-day studies).
    pub fn with_air_density(air_density: f64) -> Self {
        Self {
            air_density,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sea_level() {
        let env = Environment::default();
        assert!((env.air_density - 1.225).abs() < 1e-12);
        assert!((env.gravity - 9.81).abs() < 1e-12);
    }

    #[test]
    fn custom_density_keeps_gravity() {
        let env = Environment::with_air_density(1.0);
        assert!((env.air_density - 1.0).abs() < 1e-12);
        assert!((env.gravity - G0).abs() < 1e-12);
    }
}
