/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame timing
 * metrics shown in the telemetry overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Simulation ticks run in the last frame
 */

use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_this_frame: u32,
}
