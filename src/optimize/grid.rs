use super::axes::{OptimizationAxes, OptimizationConstraints};
use crate::perf::evaluate::{evaluate, PerformanceResult};
use crate::physics::environment::Environment;
use crate::vehicle::config::VehicleConfiguration;

// ---------------------------------------------------------------------------
// Exhaustive grid search
// ---------------------------------------------------------------------------

// Score weights: reward thrust margin and endurance, lightly penalize mass
// and power draw.
const TWR_WEIGHT: f64 = 30.0;
const FLIGHT_TIME_WEIGHT: f64 = 2.0;
const WEIGHT_PENALTY: f64 = 0.01;
const POWER_PENALTY: f64 = 0.1;

/// Minimum thrust-to-weight ratio a candidate must reach to be scored.
const MIN_TWR: f64 = 1.0;

/// Result of a grid search.
#[derive(Debug, Clone)]
pub enum OptimizationOutcome {
    /// Best feasible candidate with its metrics and score.
    Found {
        configuration: VehicleConfiguration,
        result: PerformanceResult,
        score: f64,
    },
    /// No candidate satisfied the constraints with TWR >= 1.
    Infeasible,
}

impl OptimizationOutcome {
    pub fn is_feasible(&self) -> bool {
        matches!(self, OptimizationOutcome::Found { .. })
    }
}

/// Weighted scalar score used to rank feasible candidates.
pub fn score(result: &PerformanceResult) -> f64 {
    result.twr * TWR_WEIGHT + result.flight_time_min * FLIGHT_TIME_WEIGHT
        - result.total_weight_g * WEIGHT_PENALTY
        - result.total_power_w * POWER_PENALTY
}

/// Exhaustive search over the enabled axes.
///
/// Iterates the Cartesian product in a fixed order (diameter, kv, capacity,
/// motor count) and keeps the strict score maximum, so equal-scoring
/// candidates resolve to the first one visited and repeat runs reproduce the
/// same winner. At most 4^4 = 256 evaluations with the stock lists; no
/// pruning needed.
pub fn optimize(
    env: &Environment,
    template: &VehicleConfiguration,
    axes: &OptimizationAxes,
    constraints: &OptimizationConstraints,
) -> OptimizationOutcome {
    let diameters = axes.prop_diameter.candidates(template.propeller.diameter_in);
    let kvs = axes.motor_kv.candidates(template.motor.kv);
    let capacities = axes.battery_capacity.candidates(template.battery.capacity_mah);
    let counts = axes.motor_count.candidates(template.motor.count);

    let mut best: Option<(VehicleConfiguration, PerformanceResult, f64)> = None;

    for &diameter in &diameters {
        for &kv in &kvs {
            for &capacity in &capacities {
                for &count in &counts {
                    let mut candidate = template.clone();
                    candidate.propeller.diameter_in = diameter;
                    candidate.motor.kv = kv;
                    candidate.battery.capacity_mah = capacity;
                    candidate.motor.count = count;

                    let result = evaluate(env, &candidate);

                    if result.total_weight_g > constraints.max_weight_g {
                        continue;
                    }
                    if result.flight_time_min < constraints.min_flight_time_min {
                        continue;
                    }
                    if result.twr < MIN_TWR {
                        continue;
                    }

                    let candidate_score = score(&result);
                    let replace = match &best {
                        None => true,
                        Some((_, _, best_score)) => candidate_score > *best_score,
                    };
                    if replace {
                        best = Some((candidate, result, candidate_score));
                    }
                }
            }
        }
    }

    match best {
        Some((configuration, result, score)) => OptimizationOutcome::Found {
            configuration,
            result,
            score,
        },
        None => OptimizationOutcome::Infeasible,
    }
}
