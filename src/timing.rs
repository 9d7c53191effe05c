//! Slice timing for a 1 µs tick and a 20 ms frame.
//!
//! With one counter tick per microsecond the compare value *is* the pulse width,
//! so writes never need to scale. See [`SliceTiming::for_clock`].

use fixed::FixedU16;
use fixed::types::extra::U4;

use crate::pulse::SERVO_PERIOD_US;
use crate::{Error, Result};

const TICKS_PER_SECOND: u32 = 1_000_000; // 1 µs per tick
const DIVIDER_FRAC_STEPS: u32 = 16; // 4 fractional bits
const DIVIDER_INT_MAX: u32 = 255;

/// Clock divider and wrap value for a servo slice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SliceTiming {
    /// Slice clock divider (8.4 fixed point), `clk_sys / 1 MHz`.
    pub divider: FixedU16<U4>,
    /// Counter wrap value. The frame is `top + 1` ticks.
    pub top: u16,
}

impl SliceTiming {
    /// Wrap value giving a [`SERVO_PERIOD_US`]-tick frame.
    pub const TOP: u16 = SERVO_PERIOD_US - 1;

    /// Timing for a slice clocked from `clk_sys_hz`.
    ///
    /// The divider is `clk_sys` in MHz, rounded to the nearest 1/16. On whole-MHz
    /// clocks (125 MHz on the Pico 1, 150 MHz on the Pico 2) the fraction is zero.
    ///
    /// # Errors
    ///
    /// [`Error::ClockOutOfRange`] when the integer part of the divider would fall
    /// outside 1..=255.
    pub fn for_clock(clk_sys_hz: u32) -> Result<Self> {
        let mut div_int = clk_sys_hz / TICKS_PER_SECOND;
        let rem = clk_sys_hz % TICKS_PER_SECOND;
        let mut div_frac = (rem * DIVIDER_FRAC_STEPS + TICKS_PER_SECOND / 2) / TICKS_PER_SECOND;
        if div_frac == DIVIDER_FRAC_STEPS {
            div_frac = 0;
            div_int += 1;
        }
        if div_int == 0 || div_int > DIVIDER_INT_MAX {
            return Err(Error::ClockOutOfRange { clk_sys_hz });
        }

        // div_int <= 255 and div_frac < 16, so the bits fit in 12.
        let bits = (div_int * DIVIDER_FRAC_STEPS + div_frac) as u16;
        Ok(Self {
            divider: FixedU16::from_bits(bits),
            top: Self::TOP,
        })
    }

    /// Integer part of the divider.
    #[must_use]
    pub const fn divider_int(&self) -> u8 {
        (self.divider.to_bits() >> 4) as u8
    }

    /// Fractional part of the divider, in sixteenths.
    #[must_use]
    pub const fn divider_frac(&self) -> u8 {
        (self.divider.to_bits() & 0x0F) as u8
    }

    /// Ticks (microseconds) per frame.
    #[must_use]
    pub const fn period_ticks(&self) -> u32 {
        self.top as u32 + 1
    }
}
