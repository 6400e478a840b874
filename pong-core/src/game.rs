//! Fixed-tick orchestration: input, paddles, power-ups, ball, frame.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::input::{InputSample, InputSampler};
use crate::params::{ADC_MAX, SCREEN_H, TICK_MS, TILT_GAIN, TILT_TRIGGER};
use crate::physics;
use crate::ports::{AnalogInput, Clock, DigitalInput, InertialSensor, Screen};
use crate::render;
use crate::state::GameState;

/// Cooperative stop flag for [`GameLoop::run`]. Firmware leaves it unset and
/// runs until power-off; tests set it to wind the loop down. Load/store
/// only, so it works on targets without atomic read-modify-write.
pub struct CancelToken(AtomicBool);

impl CancelToken {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Owns the injected ports and the whole game state. One `tick` runs the
/// per-tick pipeline in fixed order; `run` repeats it on the tick period.
pub struct GameLoop<S, J, B, D> {
    input: InputSampler<S, J, B>,
    screen: D,
    state: GameState,
}

impl<S, J, B, D> GameLoop<S, J, B, D>
where
    S: InertialSensor,
    J: AnalogInput,
    B: DigitalInput,
    D: Screen,
{
    pub fn new(sensor: S, joystick: J, button: B, screen: D) -> Self {
        Self {
            input: InputSampler::new(sensor, joystick, button),
            screen,
            state: GameState::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// One tick: sample inputs, move paddles and tick the power-ups, clamp,
    /// step the ball, draw the frame.
    pub fn tick(&mut self, now_ms: u32) {
        let sample = self.input.sample();
        self.apply_input(sample, now_ms);
        physics::step(&mut self.state);
        render::render(&mut self.screen, &self.state);
    }

    fn apply_input(&mut self, sample: InputSample, now_ms: u32) {
        let state = &mut self.state;

        // Player 1: tilt steers the paddle, a hard spike arms the power-up.
        state.p1.y += (sample.tilt * TILT_GAIN) as i32;
        let spike = sample.tilt > TILT_TRIGGER || sample.tilt < -TILT_TRIGGER;
        let was_powered = state.p1.power.active();
        state.p1.power.update(spike, now_ms);
        state.p1.height = state.p1.power.paddle_height();
        if state.p1.power.active() && !was_powered {
            log::info!("P1 power-up");
        }

        // Player 2: the button is a level trigger, so holding it re-arms as
        // soon as the window expires. Stick position maps straight onto the
        // travel range left by this tick's height.
        let was_powered = state.p2.power.active();
        state.p2.power.update(sample.button, now_ms);
        state.p2.height = state.p2.power.paddle_height();
        if state.p2.power.active() && !was_powered {
            log::info!("P2 power-up");
        }
        state.p2.y = sample.joystick as i32 * (SCREEN_H - state.p2.height) / ADC_MAX as i32;

        state.p1.clamp();
        state.p2.clamp();
    }

    /// Run ticks until cancelled. The period is a lower bound, not a
    /// deadline: an overrunning tick just starts the next one late.
    pub async fn run<C: Clock>(&mut self, clock: &C, cancel: &CancelToken) {
        log::info!("game loop running");
        while !cancel.is_cancelled() {
            let start = clock.now_ms();
            self.tick(start);
            clock.sleep_until(start.wrapping_add(TICK_MS)).await;
        }
        log::info!("game loop stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{PADDLE_H_NORMAL, PADDLE_H_POWERED};
    use crate::ports::IoError;
    use crate::test_support::{FakeButton, FakeJoystick, FakeScreen, FakeTilt};

    fn make_game(
        tilt: f32,
        joystick: u16,
        pressed: bool,
    ) -> GameLoop<FakeTilt, FakeJoystick, FakeButton, FakeScreen> {
        GameLoop::new(
            FakeTilt::steady(tilt),
            FakeJoystick::steady(joystick),
            FakeButton::steady(pressed),
            FakeScreen::new(),
        )
    }

    #[test]
    fn tilt_moves_p1_by_the_gain() {
        let mut game = make_game(0.5, ADC_MAX / 2, false);
        let y0 = game.state().p1.y;
        game.tick(0);
        assert_eq!(game.state().p1.y, y0 + 2, "0.5 tilt moves 2px per tick");
    }

    #[test]
    fn tilt_spike_arms_p1_power_up() {
        let mut game = make_game(0.9, ADC_MAX / 2, false);
        game.tick(0);
        assert!(game.state().p1.power.active());
        assert_eq!(game.state().p1.height, PADDLE_H_POWERED);
        assert!(!game.state().p2.power.active());
    }

    #[test]
    fn negative_tilt_spike_also_arms() {
        let mut game = make_game(-0.9, ADC_MAX / 2, false);
        game.tick(0);
        assert!(game.state().p1.power.active());
    }

    #[test]
    fn button_arms_p2_power_up() {
        let mut game = make_game(0.0, ADC_MAX / 2, true);
        game.tick(0);
        assert!(game.state().p2.power.active());
        assert_eq!(game.state().p2.height, PADDLE_H_POWERED);
        assert!(!game.state().p1.power.active());
    }

    #[test]
    fn joystick_maps_across_the_travel_range() {
        let mut low = make_game(0.0, 0, false);
        low.tick(0);
        assert_eq!(low.state().p2.y, 0);

        let mut high = make_game(0.0, ADC_MAX, false);
        high.tick(0);
        assert_eq!(high.state().p2.y, SCREEN_H - PADDLE_H_NORMAL);
    }

    #[test]
    fn paddles_stay_clamped_every_tick() {
        // Hard tilt drags P1 downward forever; stick pinned at the bottom,
        // button held so P2 keeps toggling between heights.
        let mut game = make_game(1.0, ADC_MAX, true);
        for tick in 0..200u32 {
            game.tick(tick * TICK_MS);
            let state = game.state();
            assert!(state.p1.y >= 0 && state.p1.y <= SCREEN_H - state.p1.height);
            assert!(state.p2.y >= 0 && state.p2.y <= SCREEN_H - state.p2.height);
        }
    }

    #[test]
    fn powered_paddle_near_the_bottom_is_pushed_back_on_screen() {
        let sensor = FakeTilt::steady(0.5);
        let tilt = sensor.tilt.clone();
        let mut game = GameLoop::new(
            sensor,
            FakeJoystick::steady(ADC_MAX / 2),
            FakeButton::steady(false),
            FakeScreen::new(),
        );

        // Ride a gentle tilt down to the bottom edge at normal height.
        for tick in 0..40u32 {
            game.tick(tick * TICK_MS);
        }
        assert!(!game.state().p1.power.active());
        assert_eq!(game.state().p1.y, SCREEN_H - PADDLE_H_NORMAL);

        // A spike doubles the height; the clamp pulls y back in range.
        tilt.set(0.9);
        game.tick(40 * TICK_MS);
        assert_eq!(game.state().p1.height, PADDLE_H_POWERED);
        assert_eq!(game.state().p1.y, SCREEN_H - PADDLE_H_POWERED);
    }

    #[test]
    fn sensor_dropout_leaves_paddle_control_stale() {
        let sensor = FakeTilt::steady(0.5);
        let error = sensor.error.clone();
        let mut game = GameLoop::new(
            sensor,
            FakeJoystick::steady(ADC_MAX / 2),
            FakeButton::steady(false),
            FakeScreen::new(),
        );

        game.tick(0);
        let y_after_one = game.state().p1.y;

        error.set(Some(IoError::Nack));
        game.tick(40);
        // The stale 0.5 tilt still applies.
        assert_eq!(game.state().p1.y, y_after_one + 2);
    }
}
