use std::io;

use drone_lift::optimize::{optimize, OptimizationAxes, OptimizationConstraints};
use drone_lift::perf::evaluate;
use drone_lift::physics::Environment;
use drone_lift::report;
use drone_lift::vehicle::presets;

fn main() {
    let env = Environment::default();
    let quad = presets::reference_quad();

    println!("Evaluating {} ...", quad.name);
    let result = evaluate(&env, &quad);
    report::write_report(&mut io::stdout(), &quad, &result).expect("failed to write report");

    println!();
    println!("Searching the standard grid ...");
    let outcome = optimize(
        &env,
        &quad,
        &OptimizationAxes::standard(),
        &OptimizationConstraints::default(),
    );
    report::write_outcome(&mut io::stdout(), &outcome).expect("failed to write outcome");
}
