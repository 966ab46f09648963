use super::components::{BatterySpec, FrameSpec, MotorSpec, PayloadSpec, PropellerSpec};

// ---------------------------------------------------------------------------
// Vehicle configuration: one complete build sheet
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct VehicleConfiguration {
    pub name: String,
    pub propeller: PropellerSpec,
    pub motor: MotorSpec,
    pub battery: BatterySpec,
    pub frame: FrameSpec,
    pub payload: PayloadSpec,
}

impl VehicleConfiguration {
    /// All-up weight in grams: fixed weights plus the per-motor items
    /// (motor and ESC) multiplied out.
    pub fn total_weight_g(&self) -> f64 {
        let motors = f64::from(self.motor.count);
        self.frame.weight_g
            + self.payload.flight_controller_g
            + self.payload.camera_g
            + self.payload.additional_g
            + self.payload.wiring_g
            + self.motor.weight_g * motors
            + self.frame.esc_weight_g * motors
            + self.battery.weight_g
    }
}

// ---------------------------------------------------------------------------
// Configuration builder
// ---------------------------------------------------------------------------

pub struct VehicleBuilder {
    name: String,
    propeller: PropellerSpec,
    motor: MotorSpec,
    battery: BatterySpec,
    frame: FrameSpec,
    payload: PayloadSpec,
}

impl VehicleBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            propeller: PropellerSpec::default(),
            motor: MotorSpec::default(),
            battery: BatterySpec::default(),
            frame: FrameSpec::default(),
            payload: PayloadSpec::default(),
        }
    }

    pub fn propeller(mut self, v: PropellerSpec) -> Self { self.propeller = v; self }
    pub fn motor(mut self, v: MotorSpec) -> Self { self.motor = v; self }
    pub fn battery(mut self, v: BatterySpec) -> Self { self.battery = v; self }
    pub fn frame(mut self, v: FrameSpec) -> Self { self.frame = v; self }
    pub fn payload(mut self, v: PayloadSpec) -> Self { self.payload = v; self }

    pub fn build(self) -> VehicleConfiguration {
        VehicleConfiguration {
            name: self.name,
            propeller: self.propeller,
            motor: self.motor,
            battery: self.battery,
            frame: self.frame,
            payload: self.payload,
        }
    }
}

// ---------------------------------------------------------------------------
// Preset configurations
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// 450-class camera quad on a 3S pack; the worked example used in the
    /// docs and regression tests.
    pub fn reference_quad() -> VehicleConfiguration {
        VehicleBuilder::new("Reference 450 Quad").build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_quad_weight() {
        // 4x50 motors + 4x25 ESC + 300 battery + 200 frame + 30 FC
        // + 100 camera + 0 payload + 50 wiring
        let quad = presets::reference_quad();
        assert_eq!(quad.total_weight_g(), 980.0);
    }

    #[test]
    fn builder_overrides_components() {
        let hex = VehicleBuilder::new("Hex")
            .motor(MotorSpec { count: 6, ..MotorSpec::default() })
            .build();
        assert_eq!(hex.motor.count, 6);
        // Two extra motors and ESCs over the reference quad.
        assert_eq!(hex.total_weight_g(), 980.0 + 2.0 * (50.0 + 25.0));
    }

    #[test]
    fn zero_motor_weight_is_fixed_items_only() {
        let bare = VehicleBuilder::new("Bare")
            .motor(MotorSpec { count: 0, ..MotorSpec::default() })
            .build();
        assert_eq!(bare.total_weight_g(), 680.0);
    }
}
