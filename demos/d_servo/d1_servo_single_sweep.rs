//! Sweep one servo on GPIO 2 through its angle range in 15° steps.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};
use embassy_executor::Spawner;
use embassy_time::Timer;
use pico_servo::{Result, servo};
use {defmt::info, defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    // GPIO 2 -> (2/2) % 8 = slice 1, output A. Starts centered at 1500 µs.
    let mut servo = servo! { pin: p.PIN_2, slice: p.PWM_SLICE1 }?;
    Timer::after_millis(500).await;

    servo.write_angle(45);
    info!("45° -> {}µs", servo.micros()); // 1225
    Timer::after_millis(500).await;

    servo.write_micros(2_500);
    info!("2500µs requested -> {}µs", servo.micros()); // clamped to 2000
    Timer::after_millis(500).await;

    loop {
        for degrees in (0..=180).step_by(15) {
            servo.write_angle(degrees);
            Timer::after_millis(200).await;
        }
        for degrees in (0..=180).rev().step_by(15) {
            servo.write_angle(degrees);
            Timer::after_millis(200).await;
        }
    }
}
