//! Scripted port doubles shared by the unit tests. Each fake exposes shared
//! handles so a test can change the scripted value or inject a failure after
//! the fake has been moved into the loop.

use std::cell::Cell;
use std::rc::Rc;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::params::ACCEL_FULL_SCALE;
use crate::ports::{AnalogInput, DigitalInput, InertialSensor, IoError, Screen};

pub struct FakeTilt {
    pub tilt: Rc<Cell<f32>>,
    pub error: Rc<Cell<Option<IoError>>>,
}

impl FakeTilt {
    pub fn steady(tilt: f32) -> Self {
        Self {
            tilt: Rc::new(Cell::new(tilt)),
            error: Rc::new(Cell::new(None)),
        }
    }
}

impl InertialSensor for FakeTilt {
    fn read_axes(&mut self) -> Result<(i16, i16, i16), IoError> {
        if let Some(e) = self.error.get() {
            return Err(e);
        }
        let ay = (self.tilt.get() * ACCEL_FULL_SCALE) as i16;
        Ok((0, ay, 0))
    }
}

pub struct FakeJoystick {
    pub value: Rc<Cell<u16>>,
    pub error: Rc<Cell<Option<IoError>>>,
}

impl FakeJoystick {
    pub fn steady(value: u16) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
            error: Rc::new(Cell::new(None)),
        }
    }
}

impl AnalogInput for FakeJoystick {
    fn read(&mut self) -> Result<u16, IoError> {
        if let Some(e) = self.error.get() {
            return Err(e);
        }
        Ok(self.value.get())
    }
}

/// Scripted button line. `pressed` is the logical state; the raw level
/// returned by `read` is inverted, matching an active-low line.
pub struct FakeButton {
    pub pressed: Rc<Cell<bool>>,
    pub error: Rc<Cell<Option<IoError>>>,
}

impl FakeButton {
    pub fn steady(pressed: bool) -> Self {
        Self {
            pressed: Rc::new(Cell::new(pressed)),
            error: Rc::new(Cell::new(None)),
        }
    }
}

impl DigitalInput for FakeButton {
    fn read(&mut self) -> Result<bool, IoError> {
        if let Some(e) = self.error.get() {
            return Err(e);
        }
        Ok(!self.pressed.get())
    }
}

/// Sink screen: accepts any drawing, counts flushes, can fail the flush.
pub struct FakeScreen {
    pub flushes: Rc<Cell<usize>>,
    pub fail_flush: Rc<Cell<bool>>,
}

impl FakeScreen {
    pub fn new() -> Self {
        Self {
            flushes: Rc::new(Cell::new(0)),
            fail_flush: Rc::new(Cell::new(false)),
        }
    }
}

impl OriginDimensions for FakeScreen {
    fn size(&self) -> Size {
        Size::new(128, 64)
    }
}

impl DrawTarget for FakeScreen {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        pixels.into_iter().for_each(drop);
        Ok(())
    }
}

impl Screen for FakeScreen {
    fn flush(&mut self) -> Result<(), IoError> {
        if self.fail_flush.get() {
            Err(IoError::Bus)
        } else {
            self.flushes.set(self.flushes.get() + 1);
            Ok(())
        }
    }
}
