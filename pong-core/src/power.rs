//! Time-limited paddle enlargement, one state machine per player.

use crate::params::{PADDLE_H_NORMAL, PADDLE_H_POWERED, POWERUP_MS};

/// Two states: normal and powered. Arming records the start time; the
/// power-up expires once the window has elapsed. Arming while already
/// powered is a no-op and does not extend the window.
#[derive(Debug, Clone, Copy)]
pub struct PowerUpTimer {
    active: bool,
    started_ms: u32,
}

impl PowerUpTimer {
    pub const fn new() -> Self {
        Self {
            active: false,
            started_ms: 0,
        }
    }

    /// Advance one tick. `triggered` is the player's trigger level for this
    /// tick; the arm condition is evaluated before the expiry condition, so
    /// a held trigger re-arms on the tick after expiry.
    pub fn update(&mut self, triggered: bool, now_ms: u32) {
        if triggered && !self.active {
            self.active = true;
            self.started_ms = now_ms;
        }
        if self.active && now_ms.wrapping_sub(self.started_ms) > POWERUP_MS {
            self.active = false;
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Paddle height granted by the current state.
    pub fn paddle_height(&self) -> i32 {
        if self.active {
            PADDLE_H_POWERED
        } else {
            PADDLE_H_NORMAL
        }
    }
}
