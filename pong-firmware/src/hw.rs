//! Port adapters binding the Pico's peripherals to the core's traits.

use display_interface::{DisplayError, WriteOnlyDataCommand};
use embassy_rp::adc;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Timer};
use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::i2c::{Error as _, ErrorKind, I2c};
use pong_core::ports::{AnalogInput, Clock, DigitalInput, InertialSensor, IoError, Screen};
use ssd1306::Ssd1306;
use ssd1306::mode::{BufferedGraphicsMode, DisplayConfig};
use ssd1306::rotation::DisplayRotation;
use ssd1306::size::DisplaySize128x64;

use crate::mpu6050;

fn bus_error(kind: ErrorKind) -> IoError {
    match kind {
        ErrorKind::NoAcknowledge(_) => IoError::Nack,
        _ => IoError::Bus,
    }
}

/// MPU6050 behind the inertial sensor port.
pub struct Accelerometer<I> {
    i2c: I,
}

impl<I: I2c> Accelerometer<I> {
    /// Wakes the part; it powers up asleep.
    pub fn new(mut i2c: I) -> Result<Self, I::Error> {
        mpu6050::wake(&mut i2c)?;
        Ok(Self { i2c })
    }
}

impl<I: I2c> InertialSensor for Accelerometer<I> {
    fn read_axes(&mut self) -> Result<(i16, i16, i16), IoError> {
        mpu6050::read_axes(&mut self.i2c).map_err(|e| bus_error(e.kind()))
    }
}

/// Joystick axis on the RP2040 ADC (natively 12-bit, 0..=4095).
pub struct Joystick {
    adc: adc::Adc<'static, adc::Blocking>,
    channel: adc::Channel<'static>,
}

impl Joystick {
    pub fn new(adc: adc::Adc<'static, adc::Blocking>, channel: adc::Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for Joystick {
    fn read(&mut self) -> Result<u16, IoError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| IoError::Bus)
    }
}

/// Pull-up button line. The level is reported raw; the core applies the
/// active-low inversion.
pub struct Button(pub Input<'static>);

impl DigitalInput for Button {
    fn read(&mut self) -> Result<bool, IoError> {
        Ok(self.0.is_high())
    }
}

/// SSD1306 in buffered-graphics mode behind the core's screen port.
pub struct Oled<DI> {
    panel: Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl<DI: WriteOnlyDataCommand> Oled<DI> {
    pub fn new(di: DI) -> Self {
        Self {
            panel: Ssd1306::new(di, DisplaySize128x64, DisplayRotation::Rotate0)
                .into_buffered_graphics_mode(),
        }
    }

    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.panel.init()
    }
}

impl<DI> OriginDimensions for Oled<DI> {
    fn size(&self) -> Size {
        Size::new(128, 64)
    }
}

impl<DI: WriteOnlyDataCommand> DrawTarget for Oled<DI> {
    type Color = BinaryColor;
    type Error =
        <Ssd1306<DI, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>> as DrawTarget>::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        self.panel.draw_iter(pixels)
    }
}

impl<DI: WriteOnlyDataCommand> Screen for Oled<DI> {
    fn flush(&mut self) -> Result<(), IoError> {
        self.panel.flush().map_err(|_| IoError::Bus)
    }
}

/// Millisecond clock on the embassy timebase. `Instant` is 64-bit; the
/// 32-bit view wraps every ~49.7 days, which consumers diff safely.
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }

    async fn sleep_until(&self, deadline_ms: u32) {
        let remaining = deadline_ms.wrapping_sub(self.now_ms());
        // A deadline already in the past wraps to a huge remainder.
        if remaining < u32::MAX / 2 {
            Timer::after(Duration::from_millis(remaining as u64)).await;
        }
    }
}
