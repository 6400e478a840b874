//! Frame composition for the 128x64 panel.

use core::fmt::Write as _;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_5X8, FONT_6X10};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::params::{PADDLE_W, SCREEN_W};
use crate::ports::Screen;
use crate::state::GameState;

// Fixed screen anchors. Power labels sit on the bottom 8-px row.
const SCORE_P1_AT: Point = Point::new(30, 0);
const SCORE_P2_AT: Point = Point::new(90, 0);
const POWER_P1_AT: Point = Point::new(5, 56);
const POWER_P2_AT: Point = Point::new(70, 56);

/// Compose and present one frame: clear, both paddles, the ball, the score
/// line, any active power labels, then exactly one flush. A draw or flush
/// failure drops the frame with a warning; the caller carries on with stale
/// pixels rather than tearing the loop down.
pub fn render<S: Screen>(screen: &mut S, state: &GameState) {
    if draw(screen, state).is_err() {
        log::warn!("frame dropped: draw failed");
        return;
    }
    if let Err(e) = screen.flush() {
        log::warn!("frame dropped: flush failed: {:?}", e);
    }
}

fn draw<S: Screen>(screen: &mut S, state: &GameState) -> Result<(), S::Error> {
    let fill = PrimitiveStyle::with_fill(BinaryColor::On);
    let score_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let label_style = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);

    screen.clear(BinaryColor::Off)?;

    // Paddles hug the left and right edges.
    Rectangle::new(
        Point::new(0, state.p1.y),
        Size::new(PADDLE_W as u32, state.p1.height as u32),
    )
    .into_styled(fill)
    .draw(screen)?;
    Rectangle::new(
        Point::new(SCREEN_W - PADDLE_W, state.p2.y),
        Size::new(PADDLE_W as u32, state.p2.height as u32),
    )
    .into_styled(fill)
    .draw(screen)?;

    Pixel(Point::new(state.ball.x, state.ball.y), BinaryColor::On).draw(screen)?;

    let mut buf = heapless::String::<12>::new();
    write!(buf, "{}", state.score.p1).ok();
    Text::with_baseline(&buf, SCORE_P1_AT, score_style, Baseline::Top).draw(screen)?;
    buf.clear();
    write!(buf, "{}", state.score.p2).ok();
    Text::with_baseline(&buf, SCORE_P2_AT, score_style, Baseline::Top).draw(screen)?;

    if state.p1.power.active() {
        Text::with_baseline("P1 POWER!", POWER_P1_AT, label_style, Baseline::Top).draw(screen)?;
    }
    if state.p2.power.active() {
        Text::with_baseline("P2 POWER!", POWER_P2_AT, label_style, Baseline::Top).draw(screen)?;
    }

    Ok(())
}

/// Pre-game banner, shown by the host for a couple of seconds before the
/// first tick. Same frame-drop policy as [`render`].
pub fn splash<S: Screen>(screen: &mut S) {
    if draw_splash(screen).is_err() {
        log::warn!("splash dropped: draw failed");
        return;
    }
    if let Err(e) = screen.flush() {
        log::warn!("splash dropped: flush failed: {:?}", e);
    }
}

fn draw_splash<S: Screen>(screen: &mut S) -> Result<(), S::Error> {
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    screen.clear(BinaryColor::Off)?;
    Text::with_baseline("PONG 2P", Point::new(30, 20), style, Baseline::Top).draw(screen)?;
    Text::with_baseline("MPU vs Joystick", Point::new(0, 40), style, Baseline::Top).draw(screen)?;
    Ok(())
}
