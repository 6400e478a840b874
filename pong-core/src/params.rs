//! Playfield, paddle, ball and input tuning constants.

// --- Screen ---
pub const SCREEN_W: i32 = 128;
pub const SCREEN_H: i32 = 64;

// --- Timing ---
/// Target tick period. A lower bound: an overrunning tick is not caught up.
pub const TICK_MS: u32 = 40;

// --- Paddles ---
pub const PADDLE_W: i32 = 2;
pub const PADDLE_H_NORMAL: i32 = 12;
pub const PADDLE_H_POWERED: i32 = 24;
/// Pixels of paddle travel per tick at full tilt.
pub const TILT_GAIN: f32 = 4.0;

// --- Power-ups ---
pub const POWERUP_MS: u32 = 3000;
/// Tilt magnitude that arms Player 1's power-up.
pub const TILT_TRIGGER: f32 = 0.8;

// --- Ball ---
pub const BALL_SPEED_X: i32 = 2;
pub const BALL_SPEED_Y: i32 = 1;
/// x band at each screen edge where ball/paddle contact is tested.
pub const PADDLE_PLANE: i32 = 3;

// --- Input ---
/// Full-scale joystick conversion (12-bit ADC).
pub const ADC_MAX: u16 = 4095;
/// Accelerometer counts per g at the +/-2 g range; divides the raw axis
/// into a normalized tilt in [-1.0, 1.0].
pub const ACCEL_FULL_SCALE: f32 = 16384.0;
