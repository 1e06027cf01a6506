/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * to be displayed in the UI.
 *
 * Includes metrics for:
 * - FPS (frames per second), both instantaneous and averaged since start
 * - Frame time
 * - Ticks run this frame and the cost of the last one
 */

use std::time::Duration;

// Debug information to display
#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub frames: u64,
    pub elapsed: Duration,
    pub tick_count: u64,
    pub ticks_this_frame: usize,
    pub last_tick_duration: Duration,
}

impl DebugInfo {
    // Frames counted since start divided by wall time
    pub fn average_fps(&self) -> f64 {
        let seconds = self.elapsed.as_secs_f64();
        if seconds > 0.0 {
            self.frames as f64 / seconds
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_fps() {
        let info = DebugInfo {
            frames: 120,
            elapsed: Duration::from_secs(2),
            ..DebugInfo::default()
        };
        assert!((info.average_fps() - 60.0).abs() < 1e-9);
        assert_eq!(DebugInfo::default().average_fps(), 0.0);
    }
}
