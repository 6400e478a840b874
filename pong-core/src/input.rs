//! Per-tick sampling of the three input devices.

use crate::params::{ACCEL_FULL_SCALE, ADC_MAX};
use crate::ports::{AnalogInput, DigitalInput, InertialSensor};

/// One tick's worth of input, already normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    /// Tilt along the paddle axis, -1.0..=1.0.
    pub tilt: f32,
    /// Joystick conversion, 0..=ADC_MAX.
    pub joystick: u16,
    /// Button state after active-low inversion; `true` = pressed.
    pub button: bool,
}

impl InputSample {
    /// Sample used until the first successful read of each device: level
    /// tilt, centered stick, button released.
    pub const fn neutral() -> Self {
        Self {
            tilt: 0.0,
            joystick: ADC_MAX / 2,
            button: false,
        }
    }
}

/// Reads raw tilt, joystick position and button level each tick. Holds no
/// state beyond the last sample, which stands in for any device that fails
/// to read.
pub struct InputSampler<S, J, B> {
    sensor: S,
    joystick: J,
    button: B,
    last: InputSample,
}

impl<S, J, B> InputSampler<S, J, B>
where
    S: InertialSensor,
    J: AnalogInput,
    B: DigitalInput,
{
    pub fn new(sensor: S, joystick: J, button: B) -> Self {
        Self {
            sensor,
            joystick,
            button,
            last: InputSample::neutral(),
        }
    }

    /// Sample all three devices. No filtering, no debouncing. A failed read
    /// keeps that field at its previous value; the loop never stops over a
    /// bad transaction.
    pub fn sample(&mut self) -> InputSample {
        match self.sensor.read_axes() {
            Ok((_ax, ay, _az)) => self.last.tilt = ay as f32 / ACCEL_FULL_SCALE,
            Err(e) => log::warn!("accel read failed: {:?}", e),
        }

        match self.joystick.read() {
            Ok(v) => self.last.joystick = v.min(ADC_MAX),
            Err(e) => log::warn!("joystick read failed: {:?}", e),
        }

        match self.button.read() {
            Ok(level) => self.last.button = !level,
            Err(e) => log::warn!("button read failed: {:?}", e),
        }

        self.last
    }
}
