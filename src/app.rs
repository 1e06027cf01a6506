/*
 * Application Module
 *
 * This module defines the nannou model for the boid simulation and wires the
 * simulation core to the window:
 * - the world extent is re-read from the window on every frame
 * - ticks run on a fixed 60 Hz accumulator, independent of the frame rate
 * - the flock is drawn from each boid's position and heading
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use crate::debug::DebugInfo;
use crate::input::{key_pressed, raw_window_event};
use crate::params::SimulationParams;
use crate::physics::{Simulation, World};
use crate::ui::UiState;
use crate::{renderer, ui, MAX_TICKS_PER_FRAME, TICKS_PER_SECOND};

// nannou builds the model from a plain fn, so startup settings are parked here
static STARTUP_PARAMS: OnceLock<(SimulationParams, bool)> = OnceLock::new();

const FALLBACK_WINDOW_SIZE: (f32, f32) = (1280.0, 720.0);

// Main model for the application
pub struct Model {
    pub simulation: Simulation,
    pub ui_state: UiState,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    // Fixed timestep tick variables
    pub tick_accumulator: Duration,
    pub tick_step: Duration,
}

// Run the windowed simulation until the user quits
pub fn run(params: SimulationParams, show_debug: bool) {
    if STARTUP_PARAMS.set((params, show_debug)).is_err() {
        log::warn!("Simulation already started; ignoring new parameters");
    }

    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Size the window at 80% of the primary monitor
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let monitor_size = monitor.size();
            (monitor_size.width as f32 * 0.8, monitor_size.height as f32 * 0.8)
        }
        None => FALLBACK_WINDOW_SIZE,
    };

    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(window_width as u32, window_height as u32)
        .view(view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .expect("Failed to create the simulation window");

    let window = app
        .window(window_id)
        .expect("Simulation window closed during startup");

    let egui = Egui::from_window(&window);

    let (params, show_debug) = STARTUP_PARAMS.get().cloned().unwrap_or_default();
    let ui_state = UiState::from_params(&params, show_debug);

    // The window may not report its final size yet, so fall back to the requested one
    let rect = app.window_rect();
    let world = World::new(rect.w() as f64, rect.h() as f64)
        .or_else(|_| World::new(window_width as f64, window_height as f64))
        .expect("Window has no usable size");

    log::info!(
        "Window {:.0}x{:.0}, {} boids, seed {:?}, parallel {}",
        world.width(),
        world.height(),
        params.num_boids,
        params.seed,
        params.enable_parallel
    );

    let simulation = Simulation::new(params, world);

    Model {
        simulation,
        ui_state,
        egui,
        debug_info: DebugInfo::default(),
        tick_accumulator: Duration::ZERO,
        tick_step: Duration::from_secs_f64(1.0 / TICKS_PER_SECOND),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;
    model.debug_info.elapsed = update.since_start;
    model.debug_info.frames += 1;

    model.egui.set_elapsed_time(update.since_start);
    let should_reset_boids = ui::update_ui(
        &mut model.egui,
        &mut model.ui_state,
        model.simulation.params(),
        &model.debug_info,
        model.simulation.len(),
    );

    model.simulation.set_parallel(model.ui_state.enable_parallel);
    if should_reset_boids {
        model.simulation.reset();
        model.tick_accumulator = Duration::ZERO;
    }

    // The window may have been resized since the last frame
    let rect = app.window_rect();
    match World::new(rect.w() as f64, rect.h() as f64) {
        Ok(world) => model.simulation.set_world(world),
        Err(err) => log::debug!("Keeping previous world extent: {}", err),
    }

    if model.ui_state.pause_simulation {
        model.tick_accumulator = Duration::ZERO;
        model.debug_info.ticks_this_frame = 0;
        return;
    }

    model.tick_accumulator += update.since_last;

    let mut ticks_this_frame = 0;
    while model.tick_accumulator >= model.tick_step && ticks_this_frame < MAX_TICKS_PER_FRAME {
        let started = Instant::now();
        model.simulation.advance_tick();
        model.debug_info.last_tick_duration = started.elapsed();

        model.tick_accumulator -= model.tick_step;
        ticks_this_frame += 1;
    }

    // Drop whatever we could not catch up on instead of spiralling
    if model.tick_accumulator >= model.tick_step {
        log::trace!("Dropping {:?} of simulation time", model.tick_accumulator);
        model.tick_accumulator = Duration::ZERO;
    }

    model.debug_info.ticks_this_frame = ticks_this_frame;
    model.debug_info.tick_count = model.simulation.tick_count();

    log::trace!(
        "{} ticks this frame, last took {:?}",
        ticks_this_frame,
        model.debug_info.last_tick_duration
    );
}

// Draw the flock and the UI
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    renderer::draw_boids(&draw, model.simulation.boids(), window_rect);

    if model.ui_state.show_debug {
        if let Some(first_boid) = model.simulation.boids().first() {
            let rules = &model.simulation.params().rules;
            renderer::draw_debug_overlay(&draw, first_boid, rules, window_rect);
        }
        ui::draw_debug_info(&draw, &model.debug_info, window_rect, model.simulation.len());
    }

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", err);
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        log::error!("Failed to draw UI: {:?}", err);
    }
}
