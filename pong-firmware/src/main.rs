//! Raspberry Pi Pico - two-player pong on a 128x64 I2C OLED
//!
//! Player 1: MPU6050 tilt (shared I2C0 bus), power-up on a hard tilt spike.
//! Player 2: joystick on ADC0 (GP26) + push button (GP18, active low),
//! power-up while the button is held.

#![no_std]
#![no_main]

mod hw;
mod mpu6050;

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::USB;
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_time::{Duration, Timer};
use embedded_hal_bus::i2c::RefCellDevice;
use pong_core::{CancelToken, GameLoop, render};
use ssd1306::I2CDisplayInterface;
use {defmt_rtt as _, panic_probe as _};

use hw::{Accelerometer, Button, EmbassyClock, Joystick, Oled};

bind_interrupts!(struct Irqs {
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

#[embassy_executor::task]
async fn logger_task(driver: Driver<'static, USB>) {
    embassy_usb_logger::run!(1024, log::LevelFilter::Info, driver);
}

/// Production never cancels; the loop runs until power-off or reset.
static RUN: CancelToken = CancelToken::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // USB serial logger
    let usb_driver = Driver::new(p.USB, Irqs);
    unwrap!(spawner.spawn(logger_task(usb_driver)));
    Timer::after(Duration::from_secs(2)).await;
    log::info!("=== Pong 2P ===");

    // I2C0 bus shared by the OLED and the accelerometer
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c::Config::default());
    let bus = RefCell::new(i2c);

    let mut display = Oled::new(I2CDisplayInterface::new(RefCellDevice::new(&bus)));
    display.init().unwrap();
    log::info!("Display ready!");

    let sensor = Accelerometer::new(RefCellDevice::new(&bus)).unwrap();
    log::info!("Accelerometer awake!");

    // Joystick axis (GP26 / ADC0)
    let adc = adc::Adc::new_blocking(p.ADC, adc::Config::default());
    let channel = adc::Channel::new_pin(p.PIN_26, Pull::None);
    let joystick = Joystick::new(adc, channel);

    // Player 2 power-up button (active low, pull-up)
    let button = Button(Input::new(p.PIN_18, Pull::Up));

    render::splash(&mut display);
    Timer::after(Duration::from_secs(2)).await;

    let mut game = GameLoop::new(sensor, joystick, button, display);
    game.run(&EmbassyClock, &RUN).await;
}
