//! Live parameter panel.
//!
//! Every control binds 1:1 to a wave or camera parameter; ranges and steps
//! are advisory UI metadata, not enforced by the shading math. Edits take
//! effect on the next frame.

use egui::Slider;

use crate::params::{CameraOrbit, WaveParams};

/// Draw the floating tuning window
pub fn draw(ctx: &egui::Context, waves: &mut WaveParams, orbit: &mut CameraOrbit) {
    egui::Window::new("tuning")
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.add(Slider::new(&mut waves.wave_length, 0.0..=1.0).step_by(0.01).text("wave length"));
            ui.add(Slider::new(&mut waves.frequency[0], 0.0..=10.0).step_by(0.001).text("frequency x"));
            ui.add(Slider::new(&mut waves.frequency[1], 0.0..=10.0).step_by(0.001).text("frequency y"));
            ui.add(Slider::new(&mut waves.wave_speed, 0.0..=4.0).step_by(0.001).text("wave speed"));
            ui.add(Slider::new(&mut waves.color_offset, 0.0..=1.0).step_by(0.001).text("color offset"));
            ui.add(
                Slider::new(&mut waves.color_multiplier, 0.0..=10.0)
                    .step_by(0.001)
                    .text("color multiplier"),
            );
            ui.add(
                Slider::new(&mut waves.small_wave_elevation, 0.0..=1.0)
                    .step_by(0.001)
                    .text("small wave elevation"),
            );
            ui.add(
                Slider::new(&mut waves.small_wave_frequency, 0.0..=30.0)
                    .step_by(0.001)
                    .text("small wave frequency"),
            );
            ui.add(
                Slider::new(&mut waves.small_wave_speed, 0.0..=1.0)
                    .step_by(0.001)
                    .text("small wave speed"),
            );

            ui.horizontal(|ui| {
                ui.color_edit_button_rgb(&mut waves.depth_color);
                ui.label("depth color");
            });
            ui.horizontal(|ui| {
                ui.color_edit_button_rgb(&mut waves.surface_color);
                ui.label("surface color");
            });

            ui.collapsing("camera", |ui| {
                ui.add(Slider::new(&mut orbit.distance_x, 0.0..=8.0).step_by(0.1).text("distance x"));
                ui.add(Slider::new(&mut orbit.distance_z, 0.0..=8.0).step_by(0.1).text("distance z"));
                ui.add(
                    Slider::new(&mut orbit.round_speed_x, 0.0..=0.5)
                        .step_by(0.01)
                        .text("round speed x"),
                );
                ui.add(
                    Slider::new(&mut orbit.round_speed_z, 0.0..=0.5)
                        .step_by(0.01)
                        .text("round speed z"),
                );

                for (axis, label) in ["x", "y", "z"].iter().enumerate() {
                    ui.add(
                        Slider::new(&mut orbit.look_at_move[axis], 0.0..=1.0)
                            .step_by(0.01)
                            .text(format!("look-at move {label}")),
                    );
                }
                for (axis, label) in ["x", "y", "z"].iter().enumerate() {
                    ui.add(
                        Slider::new(&mut orbit.look_at_speed[axis], 0.0..=1.0)
                            .step_by(0.01)
                            .text(format!("look-at speed {label}")),
                    );
                }
            });
        });
}
