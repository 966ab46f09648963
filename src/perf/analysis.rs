use super::evaluate::PerformanceResult;

// ---------------------------------------------------------------------------
// Qualitative classification of a performance result
// ---------------------------------------------------------------------------

// Sustained draw above this risks overheating on typical airframes, watts.
const OVERHEAT_POWER_W: f64 = 500.0;

/// Whether the vehicle can lift itself, and with how much margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwrRating {
    /// TWR below 1.0: cannot leave the ground.
    CannotFly,
    /// TWR below 1.5: flyable, limited maneuvering margin.
    Marginal,
    /// TWR 1.5 or better.
    Adequate,
}

impl TwrRating {
    pub fn classify(twr: f64) -> Self {
        if twr < 1.0 {
            TwrRating::CannotFly
        } else if twr < 1.5 {
            TwrRating::Marginal
        } else {
            TwrRating::Adequate
        }
    }

    /// One-line build advice to display next to the rating.
    pub fn recommendation(&self) -> &'static str {
        match self {
            TwrRating::CannotFly => {
                "Increase propeller size or motor power, or reduce weight."
            }
            TwrRating::Marginal => "Consider larger propellers or more powerful motors.",
            TwrRating::Adequate => "Sufficient thrust margin for stable flight.",
        }
    }
}

/// Hover endurance bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnduranceRating {
    /// Under 5 minutes.
    Critical,
    /// 5 to 15 minutes: acceptable for short missions.
    Moderate,
    /// 15 minutes or more.
    Good,
}

impl EnduranceRating {
    pub fn classify(flight_time_min: f64) -> Self {
        if flight_time_min < 5.0 {
            EnduranceRating::Critical
        } else if flight_time_min < 15.0 {
            EnduranceRating::Moderate
        } else {
            EnduranceRating::Good
        }
    }
}

impl PerformanceResult {
    pub fn twr_rating(&self) -> TwrRating {
        TwrRating::classify(self.twr)
    }

    pub fn endurance_rating(&self) -> EnduranceRating {
        EnduranceRating::classify(self.flight_time_min)
    }

    /// Total power over all-up weight, W/g. Zero for the weightless
    /// degenerate input.
    pub fn power_loading_w_per_g(&self) -> f64 {
        if self.total_weight_g > 0.0 {
            self.total_power_w / self.total_weight_g
        } else {
            0.0
        }
    }

    pub fn overheating_risk(&self) -> bool {
        self.total_power_w > OVERHEAT_POWER_W
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(twr: f64, flight_time_min: f64, total_power_w: f64) -> PerformanceResult {
        PerformanceResult {
            total_weight_g: 1000.0,
            total_thrust_g: twr * 1000.0,
            twr,
            total_power_w,
            flight_time_min,
            max_payload_g: 0.0,
        }
    }

    #[test]
    fn twr_thresholds() {
        assert_eq!(TwrRating::classify(0.99), TwrRating::CannotFly);
        assert_eq!(TwrRating::classify(1.0), TwrRating::Marginal);
        assert_eq!(TwrRating::classify(1.49), TwrRating::Marginal);
        assert_eq!(TwrRating::classify(1.5), TwrRating::Adequate);
    }

    #[test]
    fn endurance_thresholds() {
        assert_eq!(EnduranceRating::classify(4.9), EnduranceRating::Critical);
        assert_eq!(EnduranceRating::classify(5.0), EnduranceRating::Moderate);
        assert_eq!(EnduranceRating::classify(14.9), EnduranceRating::Moderate);
        assert_eq!(EnduranceRating::classify(15.0), EnduranceRating::Good);
    }

    #[test]
    fn overheating_flag() {
        assert!(!result_with(2.0, 10.0, 500.0).overheating_risk());
        assert!(result_with(2.0, 10.0, 500.1).overheating_risk());
    }

    #[test]
    fn power_loading() {
        let r = result_with(2.0, 10.0, 250.0);
        assert!((r.power_loading_w_per_g() - 0.25).abs() < 1e-12);
    }
}
