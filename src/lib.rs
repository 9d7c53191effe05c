//! Hobby servo control from a Pico's hardware PWM (Pico 1 and 2).
//!
//! One PWM slice per servo is set to a 1 µs tick and a 20 ms (50 Hz) frame, so a
//! pulse width in microseconds goes straight into the compare register. A servo takes
//! pulse widths ([`Servo::write_micros`](servo::Servo::write_micros)) or angles
//! ([`Servo::write_angle`](servo::Servo::write_angle)); both saturate instead of failing.
//!
//! # Glossary
//!
//! - **PWM ([Pulse Width Modulation](https://en.wikipedia.org/wiki/Pulse-width_modulation)) Slices:**
//!   Both Pico 1 and 2 have 8 slices (& 16 channels); the Pico 2 B package has 12. These
//!   "slices" are unrelated to Rust slices. GPIO `n` is on slice `(n / 2) % 8`, output A
//!   when `n` is even and B when odd.
//! - **Neutral:** the 1500 µs center pulse every servo starts at.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: the Cortex-M runtime must be selected (unless testing with host feature)
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the architecture feature 'arm'");

mod error;
pub mod pulse;
pub mod servo;
pub mod timing;

pub use crate::error::{Error, Result};
