use std::io::{self, Write};

use crate::optimize::OptimizationOutcome;
use crate::perf::{EnduranceRating, PerformanceResult, TwrRating};
use crate::vehicle::VehicleConfiguration;

/// Write the performance figures and build advice for one configuration.
pub fn write_report<W: Write>(
    writer: &mut W,
    config: &VehicleConfiguration,
    result: &PerformanceResult,
) -> io::Result<()> {
    writeln!(writer, "Total weight:    {:>9.1} g", result.total_weight_g)?;
    writeln!(writer, "Total thrust:    {:>9.1} g", result.total_thrust_g)?;
    writeln!(writer, "TWR:             {:>9.2}", result.twr)?;
    writeln!(writer, "Total power:     {:>9.1} W", result.total_power_w)?;
    writeln!(writer, "Flight time:     {:>9.1} min", result.flight_time_min)?;
    writeln!(writer, "Payload margin:  {:>9.1} g", result.max_payload_g)?;
    writeln!(writer)?;

    let twr_rating = result.twr_rating();
    match twr_rating {
        TwrRating::CannotFly => writeln!(
            writer,
            "CRITICAL: thrust-to-weight ratio below 1.0, {} cannot fly.",
            config.name
        )?,
        TwrRating::Marginal => writeln!(
            writer,
            "WARNING: low thrust-to-weight ratio, limited maneuverability."
        )?,
        TwrRating::Adequate => writeln!(
            writer,
            "OK: sufficient thrust-to-weight ratio for stable flight."
        )?,
    }
    writeln!(writer, "{}", twr_rating.recommendation())?;

    match result.endurance_rating() {
        EnduranceRating::Critical => writeln!(
            writer,
            "Very short flight time; consider a larger battery or a more efficient setup."
        )?,
        EnduranceRating::Moderate => {
            writeln!(writer, "Moderate flight time, acceptable for short missions.")?
        }
        EnduranceRating::Good => writeln!(writer, "Good flight time for extended operations.")?,
    }

    if result.overheating_risk() {
        writeln!(writer, "WARNING: high power draw, overheating risk.")?;
    }

    writeln!(
        writer,
        "Power loading: {:.2} W/g",
        result.power_loading_w_per_g()
    )?;
    Ok(())
}

/// Write the outcome of a grid search.
pub fn write_outcome<W: Write>(writer: &mut W, outcome: &OptimizationOutcome) -> io::Result<()> {
    match outcome {
        OptimizationOutcome::Found {
            configuration,
            result,
            score,
        } => {
            writeln!(writer, "Optimal configuration found:")?;
            writeln!(
                writer,
                "  Propeller diameter: {:.0} in",
                configuration.propeller.diameter_in
            )?;
            writeln!(writer, "  Motor KV:           {:.0} RPM/V", configuration.motor.kv)?;
            writeln!(
                writer,
                "  Battery capacity:   {:.0} mAh",
                configuration.battery.capacity_mah
            )?;
            writeln!(writer, "  Motors:             {}", configuration.motor.count)?;
            writeln!(writer)?;
            writeln!(writer, "  TWR:          {:.2}", result.twr)?;
            writeln!(writer, "  Flight time:  {:.1} min", result.flight_time_min)?;
            writeln!(writer, "  Total weight: {:.1} g", result.total_weight_g)?;
            writeln!(writer, "  Total power:  {:.1} W", result.total_power_w)?;
            writeln!(writer, "  Score:        {:.1}", score)?;
        }
        OptimizationOutcome::Infeasible => {
            writeln!(writer, "No valid configuration within constraints.")?;
            writeln!(
                writer,
                "Relax the constraints or free more parameters for the search."
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::{optimize, OptimizationAxes, OptimizationConstraints};
    use crate::perf::evaluate;
    use crate::physics::Environment;
    use crate::vehicle::presets;

    #[test]
    fn report_contains_all_result_fields() {
        let env = Environment::default();
        let quad = presets::reference_quad();
        let result = evaluate(&env, &quad);

        let mut buf = Vec::new();
        write_report(&mut buf, &quad, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Total weight:"));
        assert!(text.contains("Total thrust:"));
        assert!(text.contains("TWR:"));
        assert!(text.contains("Flight time:"));
        assert!(text.contains("Payload margin:"));
        assert!(text.contains("Power loading:"));
        // 24.77 TWR on the reference quad
        assert!(text.contains("OK: sufficient thrust-to-weight ratio"));
    }

    #[test]
    fn grounded_build_reports_cannot_fly() {
        let env = Environment::default();
        let mut quad = presets::reference_quad();
        quad.motor.kv = 100.0;
        let result = evaluate(&env, &quad);

        let mut buf = Vec::new();
        write_report(&mut buf, &quad, &result).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("CRITICAL"));
    }

    #[test]
    fn outcome_text_lists_chosen_parameters() {
        let env = Environment::default();
        let quad = presets::reference_quad();
        let outcome = optimize(
            &env,
            &quad,
            &OptimizationAxes::standard(),
            &OptimizationConstraints::default(),
        );

        let mut buf = Vec::new();
        write_outcome(&mut buf, &outcome).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Optimal configuration found:"));
        assert!(text.contains("Propeller diameter:"));
        assert!(text.contains("Score:"));
    }

    #[test]
    fn infeasible_outcome_text() {
        let mut buf = Vec::new();
        write_outcome(&mut buf, &OptimizationOutcome::Infeasible).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("No valid configuration"));
    }
}
