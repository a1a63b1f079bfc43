use std::time::Duration;

use crate::controllers::interactive::ViewCommand;
use crate::controllers::interactive::data::ui_options::{
    CUSTOM_CONSTANT_LIMIT, MAX_GAMMA, MAX_ITERATIONS, MIN_GAMMA, MIN_ITERATIONS, UiOptions,
};
use crate::core::data::bounds::Bounds;
use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// What the panel shows, copied out of the controller before the egui pass.
#[derive(Debug, Clone)]
pub struct PanelSnapshot {
    pub options: UiOptions,
    pub max_iter: u32,
    pub bounds: Bounds,
    pub active_pixels: usize,
    pub last_render: Option<Duration>,
    pub last_error: Option<String>,
}

/// Draws the control panel and returns the commands the user issued this pass.
pub fn show_panel(ctx: &egui::Context, snapshot: &PanelSnapshot) -> Vec<ViewCommand> {
    let mut commands = Vec::new();
    let options = snapshot.options;

    egui::Window::new("Controls")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                for &kind in FractalKinds::ALL {
                    let selected = kind == options.fractal_kind;

                    if ui.selectable_label(selected, kind.display_name()).clicked() {
                        commands.push(ViewCommand::SelectFormula(kind));
                    }
                }
            });

            if options.fractal_kind == FractalKinds::Custom {
                let mut constant = options.custom_constant;
                let limit = -CUSTOM_CONSTANT_LIMIT..=CUSTOM_CONSTANT_LIMIT;
                let re = ui.add(egui::Slider::new(&mut constant.real, limit.clone()).text("Re"));
                let im = ui.add(egui::Slider::new(&mut constant.imag, limit).text("Im"));

                if re.changed() || im.changed() {
                    commands.push(ViewCommand::SetCustomConstant(Complex::new(
                        constant.real,
                        constant.imag,
                    )));
                }
            }

            ui.separator();

            let mut fixed = options.fixed_iterations;
            if ui.checkbox(&mut fixed, "Fixed iterations").changed() {
                commands.push(ViewCommand::SetFixedIterations(fixed));
            }

            let mut iterations = snapshot.max_iter;
            let slider = egui::Slider::new(&mut iterations, MIN_ITERATIONS..=MAX_ITERATIONS)
                .text("Iterations");
            if ui.add_enabled(!options.fixed_iterations, slider).changed() {
                commands.push(ViewCommand::SetIterations(iterations));
            }

            ui.horizontal(|ui| {
                if ui.button(options.colour_map.display_name()).clicked() {
                    commands.push(ViewCommand::CycleColourMap);
                }

                let mut gamma = options.gamma;
                let slider = egui::Slider::new(&mut gamma, MIN_GAMMA..=MAX_GAMMA).text("Gamma");
                if ui.add(slider).changed() {
                    commands.push(ViewCommand::SetGamma(gamma));
                }
            });

            if ui.button("Reset zoom").clicked() {
                commands.push(ViewCommand::Reset);
            }

            ui.separator();
            ui.label(format!(
                "Re: [{:.6}, {:.6}]",
                snapshot.bounds.re_start, snapshot.bounds.re_end
            ));
            ui.label(format!(
                "Im: [{:.6}, {:.6}]",
                snapshot.bounds.im_start, snapshot.bounds.im_end
            ));
            ui.label(format!("Still iterating: {} px", snapshot.active_pixels));

            if let Some(duration) = snapshot.last_render {
                ui.label(format!("Colorized in {} ms", duration.as_millis()));
            }

            if let Some(message) = &snapshot.last_error {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }
        });

    commands
}
