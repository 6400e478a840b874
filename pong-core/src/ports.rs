//! Hardware-facing capability traits.
//!
//! Firmware implements these against real buses; tests implement them with
//! scripted values. Nothing in the core names a concrete transport.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::BinaryColor;

/// Transient bus failure on a sensor read or a panel flush.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoError {
    /// Device did not acknowledge the transaction.
    Nack,
    /// Any other bus-level failure (arbitration, overrun, timeout).
    Bus,
}

/// Accelerometer, signed 16-bit counts per axis.
pub trait InertialSensor {
    fn read_axes(&mut self) -> Result<(i16, i16, i16), IoError>;
}

/// One ADC channel, `0..=ADC_MAX` counts.
pub trait AnalogInput {
    fn read(&mut self) -> Result<u16, IoError>;
}

/// A push-button line, pull-up biased. `read` returns the raw level
/// (`true` = high), so a pressed button reads `false`.
pub trait DigitalInput {
    fn read(&mut self) -> Result<bool, IoError>;
}

/// Monochrome framebuffer with an explicit present step. Drawing goes
/// through [`DrawTarget`]; `flush` pushes the frame to the panel.
pub trait Screen: DrawTarget<Color = BinaryColor> {
    fn flush(&mut self) -> Result<(), IoError>;
}

/// Millisecond tick source. The counter wraps at `u32::MAX`; consumers must
/// diff timestamps with `wrapping_sub`.
#[allow(async_fn_in_trait)]
pub trait Clock {
    fn now_ms(&self) -> u32;

    /// Sleep until `deadline_ms` on this clock's wrapping timeline. A
    /// deadline that is already past returns immediately.
    async fn sleep_until(&self, deadline_ms: u32);
}
