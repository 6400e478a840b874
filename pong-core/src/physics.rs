//! Ball integration, wall and paddle collision, scoring.

use crate::params::{PADDLE_PLANE, SCREEN_H, SCREEN_W};
use crate::state::GameState;

/// Advance the ball one tick and resolve collisions in fixed order: top and
/// bottom walls first, then the left paddle plane, then the right. A ball
/// sitting on a wall inside a paddle plane takes both adjustments in the
/// same tick.
pub fn step(state: &mut GameState) {
    let GameState {
        p1,
        p2,
        ball,
        score,
    } = state;

    ball.x += ball.vx;
    ball.y += ball.vy;

    if ball.y <= 0 || ball.y >= SCREEN_H - 1 {
        ball.vy = -ball.vy;
    }

    if ball.x <= PADDLE_PLANE {
        if p1.covers(ball.y) {
            ball.vx = -ball.vx;
        } else {
            score.point_p2();
            log::info!("P2 scores: {} - {}", score.p1, score.p2);
            ball.reset();
        }
    }

    if ball.x >= SCREEN_W - PADDLE_PLANE {
        if p2.covers(ball.y) {
            ball.vx = -ball.vx;
        } else {
            score.point_p1();
            log::info!("P1 scores: {} - {}", score.p1, score.p2);
            ball.reset();
        }
    }
}
