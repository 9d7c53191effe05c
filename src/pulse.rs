//! Pulse widths, angles, and the mapping between them.
//!
//! Hobby servos read the width of a pulse repeated every 20 ms. This crate drives
//! pulses between [`SERVO_MIN_US`] and [`SERVO_MAX_US`], with [`SERVO_NEUTRAL_US`]
//! as the center. Everything here is plain arithmetic and runs on the host.
//!
//! Inputs are never rejected: out-of-range values saturate to the nearest bound.
//!
//! ```rust
//! use pico_servo::pulse::{AngleMapping, clamp_micros};
//!
//! assert_eq!(clamp_micros(2_500), 2_000);
//! assert_eq!(AngleMapping::TruncatedSlope.to_micros(45), 1_225);
//! assert_eq!(AngleMapping::Rounded.to_micros(180), 2_000);
//! ```

/// Shortest pulse the driver will write (microseconds).
pub const SERVO_MIN_US: u16 = 1_000;

/// Longest pulse the driver will write (microseconds).
pub const SERVO_MAX_US: u16 = 2_000;

/// Center position, written right after the slice is enabled (microseconds).
pub const SERVO_NEUTRAL_US: u16 = 1_500;

/// Largest commanded angle (degrees).
pub const SERVO_MAX_DEGREES: u16 = 180;

/// Length of one PWM frame (microseconds), 50 Hz.
pub const SERVO_PERIOD_US: u16 = 20_000;

/// Pulse-width step per degree for [`AngleMapping::TruncatedSlope`].
///
/// Integer division truncates 1000 / 180 to 5, so 180° lands on 1900 µs.
pub const MICROS_PER_DEGREE: u16 = (SERVO_MAX_US - SERVO_MIN_US) / SERVO_MAX_DEGREES;

/// Saturate a pulse width to [`SERVO_MIN_US`]..=[`SERVO_MAX_US`].
#[must_use]
pub fn clamp_micros(micros: i32) -> u16 {
    // In range after the clamp, so the cast is lossless.
    micros.clamp(i32::from(SERVO_MIN_US), i32::from(SERVO_MAX_US)) as u16
}

/// Saturate an angle to 0..=[`SERVO_MAX_DEGREES`].
#[must_use]
pub fn clamp_degrees(degrees: i32) -> u16 {
    degrees.clamp(0, i32::from(SERVO_MAX_DEGREES)) as u16
}

/// Linear interpolation with round-half-up.
///
/// Works in fixed point with one extra bit of precision so the result rounds to
/// nearest instead of truncating. `value` must lie within `in_min..=in_max` and
/// `in_min < in_max`.
///
/// ```rust
/// use pico_servo::pulse::rounded_map;
///
/// assert_eq!(rounded_map(1, 0, 180, 1_000, 2_000), 1_006); // 5.55.. rounds up
/// assert_eq!(rounded_map(1_006, 1_000, 2_000, 0, 180), 1);
/// ```
#[must_use]
pub const fn rounded_map(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    const HALF: i32 = 1;
    const ONE: i32 = HALF * 2;

    let range_in = in_max - in_min;
    let range_out = out_max - out_min;
    let delta_in = value - in_min;

    ((delta_in * range_out * ONE) / range_in + HALF) / ONE + out_min
}

/// How an angle becomes a pulse width.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum AngleMapping {
    /// `SERVO_MIN_US + MICROS_PER_DEGREE * degrees`.
    ///
    /// The slope is truncated to 5 µs/°, so the top of the range is 1900 µs, not 2000 µs.
    #[default]
    TruncatedSlope,
    /// Round-to-nearest interpolation over the full 1000..=2000 µs range.
    ///
    /// Angle to pulse and back returns the original angle for every angle in 0..=180.
    Rounded,
}

impl AngleMapping {
    /// Pulse width for `degrees`, clamped to 0..=180 first.
    #[must_use]
    pub fn to_micros(self, degrees: i32) -> u16 {
        let degrees = clamp_degrees(degrees);
        match self {
            Self::TruncatedSlope => SERVO_MIN_US + MICROS_PER_DEGREE * degrees,
            Self::Rounded => rounded_map(
                i32::from(degrees),
                0,
                i32::from(SERVO_MAX_DEGREES),
                i32::from(SERVO_MIN_US),
                i32::from(SERVO_MAX_US),
            ) as u16,
        }
    }

    /// Angle for a pulse width, clamped to 1000..=2000 µs first.
    ///
    /// With [`TruncatedSlope`](Self::TruncatedSlope), pulses above 1900 µs read back as 180°.
    #[must_use]
    pub fn to_degrees(self, micros: i32) -> u16 {
        let micros = clamp_micros(micros);
        match self {
            Self::TruncatedSlope => {
                ((micros - SERVO_MIN_US) / MICROS_PER_DEGREE).min(SERVO_MAX_DEGREES)
            }
            Self::Rounded => rounded_map(
                i32::from(micros),
                i32::from(SERVO_MIN_US),
                i32::from(SERVO_MAX_US),
                0,
                i32::from(SERVO_MAX_DEGREES),
            ) as u16,
        }
    }
}
