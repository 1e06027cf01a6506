/*
 * UI Module
 *
 * This module contains the egui control panel and the on-canvas debug text.
 * The population size is fixed for a run, so the panel only exposes toggles
 * and a reset button. Flock settings are shown straight from the running
 * simulation; the panel keeps nothing but its own toggles.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Toggles the panel and the keyboard can flip while the window is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    pub enable_parallel: bool,
    pub pause_simulation: bool,
    pub show_debug: bool,
}

impl UiState {
    pub fn from_params(params: &SimulationParams, show_debug: bool) -> Self {
        Self {
            enable_parallel: params.enable_parallel,
            pause_simulation: false,
            show_debug,
        }
    }

    pub fn toggle_pause(&mut self) {
        self.pause_simulation = !self.pause_simulation;
    }

    pub fn toggle_debug(&mut self) {
        self.show_debug = !self.show_debug;
    }
}

// Update the UI and return whether the boids should be scattered again
pub fn update_ui(
    egui: &mut Egui,
    state: &mut UiState,
    params: &SimulationParams,
    debug_info: &DebugInfo,
    population: usize,
) -> bool {
    let mut should_reset_boids = false;

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flock", |ui| {
                ui.label(format!("Boids: {}", population));
                ui.label(format!("Sight radius: {:.0}", params.rules.sight_radius));
                ui.label(format!("Minimum speed: {:.1}", params.min_speed));

                if ui.button("Reset Boids").clicked() {
                    should_reset_boids = true;
                }
            });

            ui.collapsing("Performance", |ui| {
                ui.checkbox(&mut state.enable_parallel, "Enable Parallel Processing");

                ui.separator();

                let frame_ms = debug_info.frame_time.as_secs_f64() * 1000.0;
                let tick_ms = debug_info.last_tick_duration.as_secs_f64() * 1000.0;
                ui.label(format!("FPS: {:.1}", debug_info.fps));
                ui.label(format!("Average FPS: {:.1}", debug_info.average_fps()));
                ui.label(format!("Frame time: {:.2} ms", frame_ms));
                ui.label(format!("Tick time: {:.2} ms", tick_ms));
                ui.label(format!("Ticks: {}", debug_info.tick_count));
            });

            ui.checkbox(&mut state.show_debug, "Show Debug Info (D)");
            ui.checkbox(&mut state.pause_simulation, "Pause Simulation (Space)");
        });

    should_reset_boids
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boids_len: usize,
) {
    // Background panel in the bottom-left corner, clear of the egui window
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 220.0;
    let panel_height = line_height * 5.0 + margin;
    let panel_x = window_rect.left() + panel_width / 2.0;
    let panel_y = window_rect.bottom() + panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0f32, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.bottom() + panel_height - margin;

    let debug_texts = [
        format!("FPS: {:.1} (avg {:.1})", debug_info.fps, debug_info.average_fps()),
        format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0),
        format!("Ticks this frame: {}", debug_info.ticks_this_frame),
        format!("Total Boids: {}", boids_len),
        format!("World: {:.0}x{:.0}", window_rect.w(), window_rect.h()),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        // Offset from the left edge stands in for left alignment
        draw.text(text)
            .x_y(text_x + 80.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
