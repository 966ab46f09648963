// Equivalent winding resistance for the load-current derating, ohms.
const R_EQUIV: f64 = 0.1;

/// Motor speed from the KV rating at a given pack voltage.
///
/// The load current knocks down the effective voltage through a fixed
/// resistive-loss term; at zero load this is exactly kv * voltage.
pub fn motor_rpm(voltage: f64, kv: f64, load_current: f64) -> f64 {
    let effective_voltage = (voltage - load_current * R_EQUIV).max(0.0);
    kv * effective_voltage
}
