use crate::config::FxConfig;
use crate::constants::FOLLOWER_DAMPING;
use crate::lifecycle::{LoopControl, StopHandle};
use glam::DVec2;

/// Raw pointer plus a trailing follower that closes a fixed fraction of the
/// gap every frame.
#[derive(Debug)]
pub struct CursorFollower {
    pointer: DVec2,
    follower: DVec2,
    damping: f64,
    hovering: bool,
    stop: StopHandle,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(FOLLOWER_DAMPING)
    }
}

impl CursorFollower {
    /// `damping` is the fraction of the remaining gap covered per frame, in (0, 1].
    pub fn new(damping: f64) -> Self {
        Self {
            pointer: DVec2::ZERO,
            follower: DVec2::ZERO,
            damping,
            hovering: false,
            stop: StopHandle::new(),
        }
    }

    pub fn from_config(config: &FxConfig) -> Self {
        Self::new(config.follower_damping)
    }

    /// Latest pointer position, stored as-is.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = DVec2::new(x, y);
    }

    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    pub fn follower(&self) -> DVec2 {
        self.follower
    }

    pub fn gap(&self) -> f64 {
        self.follower.distance(self.pointer)
    }

    /// Move the follower toward the pointer and return its new position.
    pub fn step(&mut self) -> DVec2 {
        self.follower += (self.pointer - self.follower) * self.damping;
        self.follower
    }

    pub fn tick(&mut self) -> LoopControl {
        if self.stop.is_stopped() {
            return LoopControl::Stop;
        }
        self.step();
        LoopControl::Continue
    }

    /// Hover only affects rendering scale.
    pub fn set_hover(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }
}
