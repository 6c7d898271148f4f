//! # Preview Spin
//!
//! The cosmetic turntable rotation. It runs only between a surface mount
//! and unmount and advances once per rendered frame.

use tag_mesh::Solid;

/// A start/stop repeating rotation task.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinTask {
    radians_per_frame: f64,
    running: bool,
    frames: u64,
}

impl SpinTask {
    pub fn new(radians_per_frame: f64) -> Self {
        Self {
            radians_per_frame,
            running: false,
            frames: 0,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames advanced since creation.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Rotates `solid` by one frame's worth. Returns false when stopped.
    pub fn advance(&mut self, solid: &mut Solid) -> bool {
        if !self.running {
            return false;
        }
        solid.rotate_about_up(self.radians_per_frame);
        self.frames += 1;
        true
    }
}
