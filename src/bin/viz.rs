use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use drone_lift::optimize::{optimize, OptimizationAxes, OptimizationConstraints};
use drone_lift::perf::evaluate;
use drone_lift::physics::Environment;
use drone_lift::report;
use drone_lift::sweep;
use drone_lift::vehicle::{presets, VehicleConfiguration};

fn main() -> eframe::Result {
    let app = LiftCalc {
        env: Environment::default(),
        config: presets::reference_quad(),
        outcome_text: String::new(),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Drone Lift Calculator", options, Box::new(|_| Ok(Box::new(app))))
}

struct LiftCalc {
    env: Environment,
    config: VehicleConfiguration,
    outcome_text: String,
}

impl eframe::App for LiftCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("inputs").min_width(280.0).show(ctx, |ui| {
            ui.heading("Parameters");
            ui.separator();

            ui.label("Propeller");
            ui.add(
                egui::Slider::new(&mut self.config.propeller.diameter_in, 1.0..=20.0)
                    .text("Diameter (in)"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.propeller.pitch_in, 1.0..=15.0)
                    .text("Pitch (in)"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.propeller.efficiency, 0.5..=0.95)
                    .text("Efficiency"),
            );

            ui.separator();
            ui.label("Motors");
            ui.add(egui::Slider::new(&mut self.config.motor.kv, 100.0..=5000.0).text("KV (RPM/V)"));
            ui.add(
                egui::Slider::new(&mut self.config.motor.efficiency, 0.7..=0.95).text("Efficiency"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.motor.weight_g, 10.0..=500.0).text("Weight (g)"),
            );
            ui.add(egui::Slider::new(&mut self.config.motor.count, 1..=8).text("Count"));

            ui.separator();
            ui.label("Battery");
            ui.add(
                egui::Slider::new(&mut self.config.battery.voltage_v, 3.7..=48.0).text("Voltage (V)"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.battery.capacity_mah, 500.0..=20_000.0)
                    .text("Capacity (mAh)"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.battery.weight_g, 50.0..=2000.0)
                    .text("Weight (g)"),
            );

            ui.separator();
            ui.label("Airframe and payload");
            ui.add(
                egui::Slider::new(&mut self.config.frame.weight_g, 50.0..=1000.0)
                    .text("Frame (g)"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.frame.esc_weight_g, 5.0..=100.0)
                    .text("ESC (g each)"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.payload.camera_g, 0.0..=1000.0)
                    .text("Camera (g)"),
            );
            ui.add(
                egui::Slider::new(&mut self.config.payload.additional_g, 0.0..=5000.0)
                    .text("Payload (g)"),
            );

            ui.separator();
            if ui.button("Run optimization").clicked() {
                let outcome = optimize(
                    &self.env,
                    &self.config,
                    &OptimizationAxes::standard(),
                    &OptimizationConstraints::default(),
                );
                let mut buf = Vec::new();
                if report::write_outcome(&mut buf, &outcome).is_ok() {
                    self.outcome_text = String::from_utf8_lossy(&buf).into_owned();
                }
            }
            if !self.outcome_text.is_empty() {
                ui.separator();
                ui.monospace(&self.outcome_text);
            }
        });

        // Sliders above mutate the configuration; recompute in the same
        // frame so the header and plots never lag the inputs.
        let result = evaluate(&self.env, &self.config);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(&self.config.name);
            ui.label(format!(
                "Weight: {:.0} g  |  Thrust: {:.0} g  |  TWR: {:.2}  |  Power: {:.0} W  |  \
                 Flight: {:.1} min  |  Payload margin: {:.0} g",
                result.total_weight_g,
                result.total_thrust_g,
                result.twr,
                result.total_power_w,
                result.flight_time_min,
                result.max_payload_g,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;
            let half_h = available.y / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Thrust vs RPM
                ui.vertical(|ui| {
                    ui.label("Thrust per motor (g)");
                    let points: PlotPoints =
                        sweep::thrust_vs_rpm(&self.env, &self.config).into_iter().collect();
                    Plot::new("thrust_rpm")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("RPM")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Thrust", points));
                        });
                });

                // Power vs thrust
                ui.vertical(|ui| {
                    ui.label("Power per motor (W)");
                    let points: PlotPoints =
                        sweep::power_vs_thrust(&self.config).into_iter().collect();
                    Plot::new("power_thrust")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Thrust (g)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Power", points));
                        });
                });
            });

            ui.horizontal(|ui| {
                // Flight time vs capacity
                ui.vertical(|ui| {
                    ui.label("Flight time (min)");
                    let points: PlotPoints = sweep::flight_time_vs_capacity(&self.env, &self.config)
                        .into_iter()
                        .collect();
                    Plot::new("time_capacity")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Battery capacity (mAh)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Flight time", points));
                        });
                });

                // TWR vs propeller diameter
                ui.vertical(|ui| {
                    ui.label("Thrust-to-weight ratio");
                    let points: PlotPoints = sweep::twr_vs_diameter(&self.env, &self.config)
                        .into_iter()
                        .collect();
                    Plot::new("twr_diameter")
                        .width(half_w)
                        .height(half_h)
                        .x_axis_label("Propeller diameter (in)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("TWR", points));
                        });
                });
            });
        });
    }
}
