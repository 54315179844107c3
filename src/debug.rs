/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that holds the frame metrics
 * shown in the control panel: FPS, frame time and the frame-relative
 * delta handed to the flock.
 */

use std::time::Duration;

use crate::FRAMES_PER_SECOND;

// Debug information to display
#[derive(Clone, Debug, PartialEq)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub delta_frames: f32,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            delta_frames: 0.0,
        }
    }
}

impl DebugInfo {
    // Record one frame and return its length in frame-relative units
    pub fn record_frame(&mut self, fps: f32, since_last: Duration) -> f32 {
        self.fps = fps;
        self.frame_time = since_last;
        self.delta_frames = frames_elapsed(since_last);
        self.delta_frames
    }
}

// Elapsed time expressed in frames at the nominal frame rate
pub fn frames_elapsed(since_last: Duration) -> f32 {
    since_last.as_secs_f32() * FRAMES_PER_SECOND
}
