//! A device abstraction for hobby servo motors on a hardware PWM slice.
//!
//! The slice is set up once so one counter tick is one microsecond and a frame is
//! 20 ms (50 Hz). After that, a pulse width in microseconds is written straight
//! into the compare register. See [`Servo`] for the operations.
//!
//! On the Pico, build a servo with the [`servo!`] macro:
//!
//! ```rust,ignore
//! use pico_servo::servo;
//!
//! let p = embassy_rp::init(Default::default());
//! // GPIO 2 is output A of PWM slice 1.
//! let mut servo = servo! { pin: p.PIN_2, slice: p.PWM_SLICE1 }?;
//!
//! servo.write_angle(45); // 1225 µs
//! servo.write_micros(2_500); // clamped to 2000 µs
//! ```

use crate::Result;
use crate::pulse::{AngleMapping, SERVO_NEUTRAL_US, clamp_micros};
use crate::timing::SliceTiming;

#[cfg(not(feature = "host"))]
mod rp;

#[cfg(not(feature = "host"))]
pub use rp::{RpServo, RpServoPwm, ServoChannel};
// Public for macro expansion in downstream crates.
#[cfg(not(feature = "host"))]
#[doc(hidden)]
pub use rp::{ServoPwmPin, servo_from_pin_slice};

/// Create a servo on an RP pin with keyword arguments.
///
/// Required fields: `pin`, `slice`. Optional: `mapping` (defaults to
/// [`AngleMapping::TruncatedSlope`](crate::pulse::AngleMapping::TruncatedSlope)).
/// The A/B output is inferred from the pin, and a pin/slice mismatch fails to compile.
///
/// Expands to a [`Result`](crate::Result) holding the initialized servo, already
/// centered at 1500 µs.
///
/// ```rust,ignore
/// use pico_servo::{pulse::AngleMapping, servo};
///
/// let mut servo = servo! {
///     pin: p.PIN_15,
///     slice: p.PWM_SLICE7,
///     mapping: AngleMapping::Rounded,
/// }?;
/// ```
#[macro_export]
macro_rules! servo {
    ($($tt:tt)*) => { $crate::__servo_impl! { $($tt)* } };
}
#[doc(inline)]
pub use servo;

// Public for macro expansion in downstream crates.
#[doc(hidden)]
#[macro_export]
macro_rules! __servo_impl {
    (@__fill_defaults
        pin: $pin:tt,
        slice: $slice:tt,
        mapping: $mapping:expr,
        fields: [ ]
    ) => {
        $crate::__servo_impl! {
            @__build
            pin: $pin,
            slice: $slice,
            mapping: $mapping
        }
    };

    (@__fill_defaults
        pin: $pin:tt,
        slice: $slice:tt,
        mapping: $mapping:expr,
        fields: [ pin: $pin_value:expr $(, $($rest:tt)*)? ]
    ) => {
        $crate::__servo_impl! {
            @__fill_defaults
            pin: $pin_value,
            slice: $slice,
            mapping: $mapping,
            fields: [ $($($rest)*)? ]
        }
    };

    (@__fill_defaults
        pin: $pin:tt,
        slice: $slice:tt,
        mapping: $mapping:expr,
        fields: [ slice: $slice_value:expr $(, $($rest:tt)*)? ]
    ) => {
        $crate::__servo_impl! {
            @__fill_defaults
            pin: $pin,
            slice: $slice_value,
            mapping: $mapping,
            fields: [ $($($rest)*)? ]
        }
    };

    (@__fill_defaults
        pin: $pin:tt,
        slice: $slice:tt,
        mapping: $mapping:expr,
        fields: [ mapping: $mapping_value:expr $(, $($rest:tt)*)? ]
    ) => {
        $crate::__servo_impl! {
            @__fill_defaults
            pin: $pin,
            slice: $slice,
            mapping: $mapping_value,
            fields: [ $($($rest)*)? ]
        }
    };

    (@__build
        pin: _UNSET_,
        slice: $slice:tt,
        mapping: $mapping:expr
    ) => {
        compile_error!("servo! requires `pin: ...`")
    };

    (@__build
        pin: $pin:expr,
        slice: _UNSET_,
        mapping: $mapping:expr
    ) => {
        compile_error!("servo! requires `slice: ...`")
    };

    (@__build
        pin: $pin:expr,
        slice: $slice:expr,
        mapping: $mapping:expr
    ) => {
        $crate::servo::servo_from_pin_slice($pin, $slice, $mapping)
    };

    (
        $($fields:tt)*
    ) => {
        $crate::__servo_impl! {
            @__fill_defaults
            pin: _UNSET_,
            slice: _UNSET_,
            mapping: $crate::pulse::AngleMapping::TruncatedSlope,
            fields: [ $($fields)* ]
        }
    };
}

/// The hardware side of one servo output: a pin on a PWM slice.
///
/// [`RpServoPwm`](crate::servo::RpServoPwm) binds this to `embassy_rp`. Other
/// implementations (such as a recording fake in host tests) only need to honor the
/// register semantics below.
pub trait ServoPwm {
    /// System clock frequency feeding the slice, in Hz.
    fn clk_sys_hz(&self) -> u32;

    /// Program the slice: free-running divider, phase-correct off, `timing`'s
    /// divider and wrap, then enable it.
    fn configure(&mut self, timing: &SliceTiming);

    /// Write the compare level for this pin. One tick is one microsecond.
    fn set_level(&mut self, level: u16);

    /// Start or stop the slice counter.
    fn set_enabled(&mut self, enabled: bool);
}

/// A hobby servo driven from a hardware PWM output.
///
/// Pulse widths are kept within 1000..=2000 µs and angles within 0..=180°; values
/// outside saturate rather than fail. Angles map to pulse widths with the servo's
/// [`AngleMapping`].
///
/// ```rust
/// use pico_servo::servo::{Servo, ServoPwm};
/// use pico_servo::timing::SliceTiming;
///
/// #[derive(Default)]
/// struct Compare(u16);
///
/// impl ServoPwm for Compare {
///     fn clk_sys_hz(&self) -> u32 { 125_000_000 }
///     fn configure(&mut self, _timing: &SliceTiming) {}
///     fn set_level(&mut self, level: u16) { self.0 = level; }
///     fn set_enabled(&mut self, _enabled: bool) {}
/// }
///
/// let mut servo = Servo::new(Compare::default())?;
/// assert_eq!(servo.micros(), 1_500);
///
/// servo.write_angle(45);
/// assert_eq!(servo.micros(), 1_225);
///
/// servo.write_micros(2_500);
/// assert_eq!(servo.release().0, 2_000);
/// # Ok::<(), pico_servo::Error>(())
/// ```
pub struct Servo<P: ServoPwm> {
    pwm: P,
    mapping: AngleMapping,
    level: u16, // last value written to the compare register
    enabled: bool,
}

impl<P: ServoPwm> Servo<P> {
    /// Configure the slice for 50 Hz with a 1 µs tick and center the servo.
    ///
    /// Uses [`AngleMapping::TruncatedSlope`].
    ///
    /// # Errors
    ///
    /// [`Error::ClockOutOfRange`](crate::Error::ClockOutOfRange) if the system clock
    /// cannot be divided to a 1 µs tick. The slice is left untouched in that case.
    pub fn new(pwm: P) -> Result<Self> {
        Self::with_mapping(pwm, AngleMapping::default())
    }

    /// Like [`new`](Self::new), with a chosen angle mapping.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_mapping(mut pwm: P, mapping: AngleMapping) -> Result<Self> {
        let timing = SliceTiming::for_clock(pwm.clk_sys_hz())?;
        pwm.configure(&timing);
        // Start centered rather than at whatever the compare register held.
        pwm.set_level(SERVO_NEUTRAL_US);
        Ok(Self {
            pwm,
            mapping,
            level: SERVO_NEUTRAL_US,
            enabled: true,
        })
    }

    /// Set the pulse width in microseconds, clamped to 1000..=2000.
    pub fn write_micros(&mut self, micros: i32) {
        self.write_level(clamp_micros(micros));
    }

    /// Set the position in degrees, clamped to 0..=180 and mapped to a pulse width.
    ///
    /// With the default mapping: 0° → 1000 µs, 90° → 1450 µs, 180° → 1900 µs.
    pub fn write_angle(&mut self, degrees: i32) {
        self.write_level(self.mapping.to_micros(degrees));
    }

    /// Move to the neutral 1500 µs pulse.
    pub fn center(&mut self) {
        self.write_level(SERVO_NEUTRAL_US);
    }

    fn write_level(&mut self, level: u16) {
        self.pwm.set_level(level);
        self.level = level;
    }

    /// The pulse width last written, in microseconds.
    #[must_use]
    pub const fn micros(&self) -> u16 {
        self.level
    }

    /// The last written pulse width expressed as an angle.
    #[must_use]
    pub fn angle(&self) -> u16 {
        self.mapping.to_degrees(i32::from(self.level))
    }

    /// The mapping used by [`write_angle`](Self::write_angle).
    #[must_use]
    pub const fn mapping(&self) -> AngleMapping {
        self.mapping
    }

    /// Change the mapping for later [`write_angle`](Self::write_angle) calls.
    pub fn set_mapping(&mut self, mapping: AngleMapping) {
        self.mapping = mapping;
    }

    /// Stop sending pulses so the servo relaxes.
    ///
    /// The last level is kept and comes back with [`enable`](Self::enable).
    pub fn disable(&mut self) {
        self.pwm.set_enabled(false);
        self.enabled = false;
    }

    /// Resume pulses at the last written level.
    pub fn enable(&mut self) {
        self.pwm.set_enabled(true);
        self.enabled = true;
    }

    /// Whether the slice is currently sending pulses.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Hand back the hardware output. The slice keeps running.
    #[must_use]
    pub fn release(self) -> P {
        self.pwm
    }
}
