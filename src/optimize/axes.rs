// ---------------------------------------------------------------------------
// Search axes and constraints
// ---------------------------------------------------------------------------

/// Stock candidate lists for the four searchable parameters.
pub const PROP_DIAMETER_CANDIDATES_IN: &[f64] = &[8.0, 10.0, 12.0, 14.0];
pub const MOTOR_KV_CANDIDATES: &[f64] = &[800.0, 1000.0, 1200.0, 1500.0];
pub const BATTERY_CAPACITY_CANDIDATES_MAH: &[f64] = &[3000.0, 5000.0, 8000.0, 10_000.0];
pub const MOTOR_COUNT_CANDIDATES: &[u32] = &[3, 4, 6, 8];

/// One searchable parameter: either pinned to the template's value or swept
/// over a discrete candidate list.
#[derive(Debug, Clone, Default)]
pub enum Axis<T> {
    #[default]
    Fixed,
    Sweep(Vec<T>),
}

impl<T: Copy> Axis<T> {
    /// Values this axis contributes to the grid, given the template's value.
    pub fn candidates(&self, fixed: T) -> Vec<T> {
        match self {
            Axis::Fixed => vec![fixed],
            Axis::Sweep(values) => values.clone(),
        }
    }
}

/// Which parameters the grid search may vary.
#[derive(Debug, Clone, Default)]
pub struct OptimizationAxes {
    pub prop_diameter: Axis<f64>,
    pub motor_kv: Axis<f64>,
    pub battery_capacity: Axis<f64>,
    pub motor_count: Axis<u32>,
}

impl OptimizationAxes {
    /// Every axis pinned to the template; the search degenerates to a single
    /// evaluation.
    pub fn none() -> Self {
        Self::default()
    }

    /// All four axes swept over the stock candidate lists (256 grid points).
    pub fn standard() -> Self {
        Self {
            prop_diameter: Axis::Sweep(PROP_DIAMETER_CANDIDATES_IN.to_vec()),
            motor_kv: Axis::Sweep(MOTOR_KV_CANDIDATES.to_vec()),
            battery_capacity: Axis::Sweep(BATTERY_CAPACITY_CANDIDATES_MAH.to_vec()),
            motor_count: Axis::Sweep(MOTOR_COUNT_CANDIDATES.to_vec()),
        }
    }
}

/// Hard limits a candidate must satisfy before it is scored.
#[derive(Debug, Clone)]
pub struct OptimizationConstraints {
    pub max_weight_g: f64,
    pub min_flight_time_min: f64,
    /// Budget ceiling in currency units. Carried for display; no cost model
    /// feeds the score yet.
    pub max_cost: f64,
}

impl Default for OptimizationConstraints {
    fn default() -> Self {
        Self {
            max_weight_g: 2000.0,
            min_flight_time_min: 10.0,
            max_cost: 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_axis_yields_template_value() {
        let axis: Axis<f64> = Axis::Fixed;
        assert_eq!(axis.candidates(10.0), vec![10.0]);
    }

    #[test]
    fn sweep_axis_ignores_template_value() {
        let axis = Axis::Sweep(vec![8.0, 12.0]);
        assert_eq!(axis.candidates(10.0), vec![8.0, 12.0]);
    }

    #[test]
    fn standard_axes_cover_the_stock_lists() {
        let axes = OptimizationAxes::standard();
        assert_eq!(axes.prop_diameter.candidates(0.0).len(), 4);
        assert_eq!(axes.motor_count.candidates(0).len(), 4);
    }
}
