use std::io;

use drone_lift::optimize::{optimize, OptimizationAxes, OptimizationConstraints};
use drone_lift::perf::evaluate;
use drone_lift::physics::Environment;
use drone_lift::report;
use drone_lift::vehicle::presets;

fn main() {
    let env = Environment::default();
    let quad = presets::reference_quad();
    let result = evaluate(&env, &quad);

    // -----------------------------------------------------------------------
    // Build sheet
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  DRONE LIFT CALCULATOR - {}", quad.name);
    println!("====================================================================");
    println!();
    println!("  Build Sheet");
    println!("  ------------------------------------------------------------------");
    println!(
        "  Propeller:  {:.1} x {:.1} in        efficiency {:.0}%",
        quad.propeller.diameter_in,
        quad.propeller.pitch_in,
        quad.propeller.efficiency * 100.0
    );
    println!(
        "  Motors:     {} x {:.0} KV           {:.0} g each, efficiency {:.0}%",
        quad.motor.count,
        quad.motor.kv,
        quad.motor.weight_g,
        quad.motor.efficiency * 100.0
    );
    println!(
        "  Battery:    {:.1} V  {:.0} mAh    {:.1} Wh, {:.0} g",
        quad.battery.voltage_v,
        quad.battery.capacity_mah,
        quad.battery.energy_wh(),
        quad.battery.weight_g
    );
    println!(
        "  Airframe:   frame {:.0} g, ESC {:.0} g x {}, FC {:.0} g, camera {:.0} g, wiring {:.0} g",
        quad.frame.weight_g,
        quad.frame.esc_weight_g,
        quad.motor.count,
        quad.payload.flight_controller_g,
        quad.payload.camera_g,
        quad.payload.wiring_g
    );
    println!();

    // -----------------------------------------------------------------------
    // Performance
    // -----------------------------------------------------------------------
    println!("  Performance");
    println!("  ------------------------------------------------------------------");
    report::write_report(&mut io::stdout(), &quad, &result).expect("failed to write report");
    println!();

    // -----------------------------------------------------------------------
    // Grid search over the stock candidate lists
    // -----------------------------------------------------------------------
    println!("  Optimization (standard grid, default constraints)");
    println!("  ------------------------------------------------------------------");
    let outcome = optimize(
        &env,
        &quad,
        &OptimizationAxes::standard(),
        &OptimizationConstraints::default(),
    );
    report::write_outcome(&mut io::stdout(), &outcome).expect("failed to write outcome");
    println!();
    println!("====================================================================");
    println!();
}
