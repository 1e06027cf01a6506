/*
 * Input Module
 *
 * Keyboard controls for the simulation window:
 * - Q quits
 * - Space pauses and resumes ticking
 * - D toggles the debug overlay
 *
 * Closing the window also ends the run; nannou handles that on its own.
 */

use nannou::prelude::*;

use crate::app::Model;

// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    TogglePause,
    ToggleDebug,
}

pub fn key_action(key: Key) -> Option<KeyAction> {
    match key {
        Key::Q => Some(KeyAction::Quit),
        Key::Space => Some(KeyAction::TogglePause),
        Key::D => Some(KeyAction::ToggleDebug),
        _ => None,
    }
}

// Key pressed event handler
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    // Typing into an egui widget should not drive the simulation
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    match key_action(key) {
        Some(KeyAction::Quit) => {
            log::info!("Quit requested after {} ticks", model.simulation.tick_count());
            app.quit();
        }
        Some(KeyAction::TogglePause) => {
            model.ui_state.toggle_pause();
            log::debug!("Paused: {}", model.ui_state.pause_simulation);
        }
        Some(KeyAction::ToggleDebug) => {
            model.ui_state.toggle_debug();
        }
        None => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
