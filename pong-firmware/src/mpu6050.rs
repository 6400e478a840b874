//! MPU6050 register protocol: one wake write at startup, then 6-byte
//! accelerometer bursts. Stateless; the caller supplies the bus.

use embedded_hal::i2c::I2c;

pub const ADDR: u8 = 0x68;

const REG_PWR_MGMT_1: u8 = 0x6B;
const REG_ACCEL_XOUT_H: u8 = 0x3B;

/// Clear the sleep bit. The part powers up asleep and reads all-zero axes
/// until this is written once.
pub fn wake<I: I2c>(i2c: &mut I) -> Result<(), I::Error> {
    i2c.write(ADDR, &[REG_PWR_MGMT_1, 0x00])
}

/// Burst-read the three accelerometer axes: big-endian i16 pairs starting
/// at ACCEL_XOUT_H.
pub fn read_axes<I: I2c>(i2c: &mut I) -> Result<(i16, i16, i16), I::Error> {
    let mut raw = [0u8; 6];
    i2c.write_read(ADDR, &[REG_ACCEL_XOUT_H], &mut raw)?;
    Ok((
        i16::from_be_bytes([raw[0], raw[1]]),
        i16::from_be_bytes([raw[2], raw[3]]),
        i16::from_be_bytes([raw[4], raw[5]]),
    ))
}
