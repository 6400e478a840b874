//! Game entities: paddles, ball, score, and the aggregate state.

use crate::params::{
    BALL_SPEED_X, BALL_SPEED_Y, PADDLE_H_NORMAL, SCREEN_H, SCREEN_W,
};
use crate::power::PowerUpTimer;

#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    /// Top edge, display space.
    pub y: i32,
    /// Current height, normal or powered.
    pub height: i32,
    pub power: PowerUpTimer,
}

impl Paddle {
    /// Centered, normal height, power-up inactive.
    pub const fn new() -> Self {
        Self {
            y: SCREEN_H / 2 - PADDLE_H_NORMAL / 2,
            height: PADDLE_H_NORMAL,
            power: PowerUpTimer::new(),
        }
    }

    /// Keep the paddle fully on screen for its current height.
    pub fn clamp(&mut self) {
        if self.y < 0 {
            self.y = 0;
        }
        if self.y > SCREEN_H - self.height {
            self.y = SCREEN_H - self.height;
        }
    }

    /// Whether the vertical span `[y, y + height]` contains `ball_y`.
    /// Inclusive at both ends.
    pub fn covers(&self, ball_y: i32) -> bool {
        self.y <= ball_y && ball_y <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
}

impl Ball {
    /// Centered, serving right and slightly down.
    pub const fn new() -> Self {
        Self {
            x: SCREEN_W / 2,
            y: SCREEN_H / 2,
            vx: BALL_SPEED_X,
            vy: BALL_SPEED_Y,
        }
    }

    /// Back to center after a miss. Serve direction flips; vertical speed
    /// keeps its sign but is forced back to magnitude 1.
    pub fn reset(&mut self) {
        self.x = SCREEN_W / 2;
        self.y = SCREEN_H / 2;
        self.vx = -self.vx;
        self.vy = if self.vy > 0 { 1 } else { -1 };
    }
}

/// Two monotone counters. Incremented only on a miss, never reset.
#[derive(Debug, Clone, Copy)]
pub struct Score {
    pub p1: u32,
    pub p2: u32,
}

impl Score {
    pub const fn new() -> Self {
        Self { p1: 0, p2: 0 }
    }

    pub fn point_p1(&mut self) {
        self.p1 += 1;
    }

    pub fn point_p2(&mut self) {
        self.p2 += 1;
    }
}

/// Everything the loop mutates, owned by the loop alone.
#[derive(Debug, Clone, Copy)]
pub struct GameState {
    pub p1: Paddle,
    pub p2: Paddle,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    pub const fn new() -> Self {
        Self {
            p1: Paddle::new(),
            p2: Paddle::new(),
            ball: Ball::new(),
            score: Score::new(),
        }
    }
}
