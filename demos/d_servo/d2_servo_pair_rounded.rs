//! Two servos on separate slices: one with the truncated slope, one rounded.
//!
//! At 180° the first stops at 1900 µs while the second reaches 2000 µs. Both relax
//! between sweeps.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};
use embassy_executor::Spawner;
use embassy_time::Timer;
use pico_servo::{Result, pulse::AngleMapping, servo};
use {defmt::info, defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // GPIO 11 -> slice 5 (B), GPIO 12 -> slice 6 (A).
    let mut truncated = servo! { pin: p.PIN_11, slice: p.PWM_SLICE5 }?;
    let mut rounded = servo! {
        pin: p.PIN_12,
        slice: p.PWM_SLICE6,
        mapping: AngleMapping::Rounded,
    }?;

    loop {
        for degrees in [0, 90, 180] {
            truncated.write_angle(degrees);
            rounded.write_angle(degrees);
            info!(
                "{}°: truncated {}µs, rounded {}µs",
                degrees,
                truncated.micros(),
                rounded.micros()
            );
            Timer::after_millis(800).await;
        }

        truncated.disable();
        rounded.disable();
        Timer::after_secs(2).await;
        truncated.enable();
        rounded.enable();
    }
}
