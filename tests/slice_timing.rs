#![allow(missing_docs)]
//! Host-level tests for the slice divider and wrap computation.

use fixed::FixedU16;
use fixed::types::extra::U4;
use pico_servo::Error;
use pico_servo::timing::SliceTiming;

#[test]
fn pico1_clock_divides_by_125() {
    let timing = SliceTiming::for_clock(125_000_000).unwrap();
    assert_eq!(timing.divider, FixedU16::<U4>::from_num(125));
    assert_eq!(timing.divider_int(), 125);
    assert_eq!(timing.divider_frac(), 0);
}

#[test]
fn pico2_clock_divides_by_150() {
    let timing = SliceTiming::for_clock(150_000_000).unwrap();
    assert_eq!(timing.divider_int(), 150);
    assert_eq!(timing.divider_frac(), 0);
}

#[test]
fn frame_is_twenty_thousand_ticks() {
    let timing = SliceTiming::for_clock(125_000_000).unwrap();
    assert_eq!(timing.top, 19_999);
    assert_eq!(timing.top, SliceTiming::TOP);
    assert_eq!(timing.period_ticks(), 20_000);
}

#[test]
fn fractional_megahertz_uses_sixteenths() {
    let timing = SliceTiming::for_clock(12_500_000).unwrap();
    assert_eq!(timing.divider_int(), 12);
    assert_eq!(timing.divider_frac(), 8);
    assert_eq!(timing.divider, FixedU16::<U4>::from_num(12.5));
}

#[test]
fn fraction_rounding_carries_into_integer_part() {
    let timing = SliceTiming::for_clock(132_999_999).unwrap();
    assert_eq!(timing.divider_int(), 133);
    assert_eq!(timing.divider_frac(), 0);
}

#[test]
fn just_under_one_megahertz_rounds_to_divider_one() {
    let timing = SliceTiming::for_clock(999_999).unwrap();
    assert_eq!(timing.divider_int(), 1);
    assert_eq!(timing.divider_frac(), 0);
}

#[test]
fn slowest_and_fastest_dividable_clocks() {
    assert_eq!(SliceTiming::for_clock(1_000_000).unwrap().divider_int(), 1);
    let fastest = SliceTiming::for_clock(255_937_500).unwrap();
    assert_eq!(fastest.divider_int(), 255);
    assert_eq!(fastest.divider_frac(), 15);
}

#[test]
fn too_slow_clock_is_rejected() {
    assert_eq!(
        SliceTiming::for_clock(500_000),
        Err(Error::ClockOutOfRange {
            clk_sys_hz: 500_000
        })
    );
    assert_eq!(
        SliceTiming::for_clock(0),
        Err(Error::ClockOutOfRange { clk_sys_hz: 0 })
    );
}

#[test]
fn too_fast_clock_is_rejected() {
    assert_eq!(
        SliceTiming::for_clock(256_000_000),
        Err(Error::ClockOutOfRange {
            clk_sys_hz: 256_000_000
        })
    );
    assert!(SliceTiming::for_clock(255_999_999).is_err());
}

#[test]
fn error_message_names_the_clock() {
    let err = SliceTiming::for_clock(300_000_000).unwrap_err();
    assert_eq!(
        err.to_string(),
        "clk_sys of 300000000 Hz cannot be divided to a 1 µs PWM tick"
    );
}
