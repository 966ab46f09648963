// ---------------------------------------------------------------------------
// Component specifications (one struct per build-sheet line item)
// ---------------------------------------------------------------------------

/// Propeller geometry and efficiency.
#[derive(Debug, Clone)]
pub struct PropellerSpec {
    pub diameter_in: f64, // inches
    pub pitch_in: f64,    // inches
    pub efficiency: f64,  // fraction, 0-1
}

impl Default for PropellerSpec {
    fn default() -> Self {
        Self {
            diameter_in: 10.0,
            pitch_in: 4.5,
            efficiency: 0.8,
        }
    }
}

/// Brushless motor electrical and mass properties.
#[derive(Debug, Clone)]
pub struct MotorSpec {
    pub kv: f64,         // RPM per volt
    pub efficiency: f64, // fraction, 0-1
    pub weight_g: f64,   // grams, per motor
    pub count: u32,
}

impl Default for MotorSpec {
    fn default() -> Self {
        Self {
            kv: 1000.0,
            efficiency: 0.85,
            weight_g: 50.0,
            count: 4,
        }
    }
}

/// Battery pack.
#[derive(Debug, Clone)]
pub struct BatterySpec {
    pub voltage_v: f64,    // volts
    pub capacity_mah: f64, // milliamp-hours
    pub weight_g: f64,     // grams
}

impl BatterySpec {
    /// Stored energy in watt-hours.
    pub fn energy_wh(&self) -> f64 {
        self.voltage_v * self.capacity_mah / 1000.0
    }
}

impl Default for BatterySpec {
    fn default() -> Self {
        Self {
            voltage_v: 11.1,
            capacity_mah: 5000.0,
            weight_g: 300.0,
        }
    }
}

/// Airframe structure. One ESC per motor.
#[derive(Debug, Clone)]
pub struct FrameSpec {
    pub weight_g: f64,     // grams
    pub esc_weight_g: f64, // grams, per ESC
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self {
            weight_g: 200.0,
            esc_weight_g: 25.0,
        }
    }
}

/// Electronics and cargo fixed weights.
#[derive(Debug, Clone)]
pub struct PayloadSpec {
    pub flight_controller_g: f64,
    pub camera_g: f64,
    pub additional_g: f64,
    pub wiring_g: f64,
}

impl Default for PayloadSpec {
    fn default() -> Self {
        Self {
            flight_controller_g: 30.0,
            camera_g: 100.0,
            additional_g: 0.0,
            wiring_g: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn battery_energy() {
        let pack = BatterySpec::default();
        assert!((pack.energy_wh() - 55.5).abs() < 1e-9);
    }
}
