//! [`ServoPwm`] on an `embassy_rp` PWM slice.

use defmt::{debug, info};
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pwm::{Config, Pwm};
use embassy_rp::{Peri, PeripheralType, peripherals};

use super::{Servo, ServoPwm};
use crate::Result;
use crate::pulse::{AngleMapping, SERVO_NEUTRAL_US};
use crate::timing::SliceTiming;

/// A [`Servo`] on an RP pin.
pub type RpServo<'d> = Servo<RpServoPwm<'d>>;

/// Which output of the slice drives the servo.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum ServoChannel {
    /// Output A (even GPIO).
    A,
    /// Output B (odd GPIO).
    B,
}

/// One servo output on an RP PWM slice.
///
/// Keeps the slice [`Config`] so a level change re-applies the same divider and
/// wrap; a fresh default config would reset the divider.
pub struct RpServoPwm<'d> {
    pwm: Pwm<'d>,
    cfg: Config,
    channel: ServoChannel,
}

impl<'d> RpServoPwm<'d> {
    /// Wrap a slice created with `Pwm::new_output_a`.
    #[must_use]
    pub fn new_output_a(pwm: Pwm<'d>) -> Self {
        Self::with_channel(pwm, ServoChannel::A)
    }

    /// Wrap a slice created with `Pwm::new_output_b`.
    #[must_use]
    pub fn new_output_b(pwm: Pwm<'d>) -> Self {
        Self::with_channel(pwm, ServoChannel::B)
    }

    fn with_channel(pwm: Pwm<'d>, channel: ServoChannel) -> Self {
        Self {
            pwm,
            cfg: Config::default(),
            channel,
        }
    }

    /// The slice output this servo uses.
    #[must_use]
    pub const fn channel(&self) -> ServoChannel {
        self.channel
    }

    fn set_compare(&mut self, level: u16) {
        match self.channel {
            ServoChannel::A => self.cfg.compare_a = level,
            ServoChannel::B => self.cfg.compare_b = level,
        }
    }
}

impl ServoPwm for RpServoPwm<'_> {
    fn clk_sys_hz(&self) -> u32 {
        clk_sys_freq()
    }

    fn configure(&mut self, timing: &SliceTiming) {
        // `Pwm::new_output_*` already put the slice in free-running divider mode.
        self.cfg.top = timing.top;
        self.cfg.divider = timing.divider;
        self.cfg.phase_correct = false; // phase-correct halves the frequency
        self.set_compare(SERVO_NEUTRAL_US);
        self.cfg.enable = true;
        self.pwm.set_config(&self.cfg);

        info!(
            "servo {} clk={}Hz div={}+{}/16 top={}",
            self.channel,
            clk_sys_freq(),
            timing.divider_int(),
            timing.divider_frac(),
            timing.top
        );
    }

    fn set_level(&mut self, level: u16) {
        self.set_compare(level);
        self.pwm.set_config(&self.cfg);
        debug!("servo {} level={}µs", self.channel, level);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.cfg.enable = enabled;
        self.pwm.set_config(&self.cfg);
    }
}

// Public for macro expansion in downstream crates.
#[doc(hidden)]
pub trait ServoPwmPin<S: PeripheralType>: PeripheralType {
    /// Claim `slice` with this pin on its output.
    fn new_servo_pwm<'d>(slice: Peri<'d, S>, pin: Peri<'d, Self>) -> RpServoPwm<'d>;
}

// Public for macro expansion in downstream crates.
#[doc(hidden)]
pub fn servo_from_pin_slice<'d, P, S>(
    pin: Peri<'d, P>,
    slice: Peri<'d, S>,
    mapping: AngleMapping,
) -> Result<RpServo<'d>>
where
    P: ServoPwmPin<S>,
    S: PeripheralType,
{
    Servo::with_mapping(P::new_servo_pwm(slice, pin), mapping)
}

// Each slice drives one even (A) and one odd (B) GPIO.
macro_rules! servo_pin_pair {
    ($slice:ident: $pin_a:ident, $pin_b:ident) => {
        impl ServoPwmPin<peripherals::$slice> for peripherals::$pin_a {
            fn new_servo_pwm<'d>(
                slice: Peri<'d, peripherals::$slice>,
                pin: Peri<'d, Self>,
            ) -> RpServoPwm<'d> {
                RpServoPwm::new_output_a(Pwm::new_output_a(slice, pin, Config::default()))
            }
        }

        impl ServoPwmPin<peripherals::$slice> for peripherals::$pin_b {
            fn new_servo_pwm<'d>(
                slice: Peri<'d, peripherals::$slice>,
                pin: Peri<'d, Self>,
            ) -> RpServoPwm<'d> {
                RpServoPwm::new_output_b(Pwm::new_output_b(slice, pin, Config::default()))
            }
        }
    };
}

servo_pin_pair!(PWM_SLICE0: PIN_0, PIN_1);
servo_pin_pair!(PWM_SLICE1: PIN_2, PIN_3);
servo_pin_pair!(PWM_SLICE2: PIN_4, PIN_5);
servo_pin_pair!(PWM_SLICE3: PIN_6, PIN_7);
servo_pin_pair!(PWM_SLICE4: PIN_8, PIN_9);
servo_pin_pair!(PWM_SLICE5: PIN_10, PIN_11);
servo_pin_pair!(PWM_SLICE6: PIN_12, PIN_13);
servo_pin_pair!(PWM_SLICE7: PIN_14, PIN_15);
servo_pin_pair!(PWM_SLICE0: PIN_16, PIN_17);
servo_pin_pair!(PWM_SLICE1: PIN_18, PIN_19);
servo_pin_pair!(PWM_SLICE2: PIN_20, PIN_21);
servo_pin_pair!(PWM_SLICE3: PIN_22, PIN_23);
servo_pin_pair!(PWM_SLICE4: PIN_24, PIN_25);
servo_pin_pair!(PWM_SLICE5: PIN_26, PIN_27);
servo_pin_pair!(PWM_SLICE6: PIN_28, PIN_29);

#[cfg(feature = "pico2")]
servo_pin_pair!(PWM_SLICE7: PIN_30, PIN_31);
#[cfg(feature = "pico2")]
servo_pin_pair!(PWM_SLICE8: PIN_32, PIN_33);
#[cfg(feature = "pico2")]
servo_pin_pair!(PWM_SLICE9: PIN_34, PIN_35);
#[cfg(feature = "pico2")]
servo_pin_pair!(PWM_SLICE10: PIN_36, PIN_37);
#[cfg(feature = "pico2")]
servo_pin_pair!(PWM_SLICE11: PIN_38, PIN_39);
#[cfg(feature = "pico2")]
servo_pin_pair!(PWM_SLICE8: PIN_40, PIN_41);
#[cfg(feature = "pico2")]
servo_pin_pair!(PWM_SLICE9: PIN_42, PIN_43);
#[cfg(feature = "pico2")]
servo_pin_pair!(PWM_SLICE10: PIN_44, PIN_45);
#[cfg(feature = "pico2")]
servo_pin_pair!(PWM_SLICE11: PIN_46, PIN_47);
