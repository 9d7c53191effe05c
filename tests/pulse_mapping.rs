#![allow(missing_docs)]
//! Host-level tests for pulse clamping and angle mapping.

use pico_servo::pulse::{
    AngleMapping, MICROS_PER_DEGREE, SERVO_MAX_DEGREES, SERVO_MAX_US, SERVO_MIN_US,
    clamp_degrees, clamp_micros, rounded_map,
};

#[test]
fn truncated_slope_is_five_micros_per_degree() {
    assert_eq!(MICROS_PER_DEGREE, 5);
}

#[test]
fn clamp_micros_passes_in_range_values_through() {
    for micros in i32::from(SERVO_MIN_US)..=i32::from(SERVO_MAX_US) {
        assert_eq!(i32::from(clamp_micros(micros)), micros);
    }
}

#[test]
fn clamp_micros_saturates_out_of_range_values() {
    assert_eq!(clamp_micros(999), 1_000);
    assert_eq!(clamp_micros(0), 1_000);
    assert_eq!(clamp_micros(-40), 1_000);
    assert_eq!(clamp_micros(i32::MIN), 1_000);
    assert_eq!(clamp_micros(2_001), 2_000);
    assert_eq!(clamp_micros(2_500), 2_000);
    assert_eq!(clamp_micros(i32::MAX), 2_000);
}

#[test]
fn clamp_degrees_saturates_out_of_range_values() {
    assert_eq!(clamp_degrees(-1), 0);
    assert_eq!(clamp_degrees(0), 0);
    assert_eq!(clamp_degrees(135), 135);
    assert_eq!(clamp_degrees(180), 180);
    assert_eq!(clamp_degrees(181), 180);
    assert_eq!(clamp_degrees(i32::MAX), 180);
}

#[test]
fn truncated_slope_matches_integer_formula() {
    let mapping = AngleMapping::TruncatedSlope;
    for degrees in 0..=i32::from(SERVO_MAX_DEGREES) {
        assert_eq!(i32::from(mapping.to_micros(degrees)), 1_000 + 5 * degrees);
    }
}

#[test]
fn truncated_slope_tops_out_at_1900() {
    let mapping = AngleMapping::TruncatedSlope;
    assert_eq!(mapping.to_micros(0), 1_000);
    assert_eq!(mapping.to_micros(45), 1_225);
    assert_eq!(mapping.to_micros(90), 1_450);
    assert_eq!(mapping.to_micros(180), 1_900);
}

#[test]
fn out_of_range_angles_map_like_the_nearest_bound() {
    for mapping in [AngleMapping::TruncatedSlope, AngleMapping::Rounded] {
        assert_eq!(mapping.to_micros(-30), mapping.to_micros(0));
        assert_eq!(mapping.to_micros(270), mapping.to_micros(180));
    }
}

#[test]
fn default_mapping_is_truncated_slope() {
    assert_eq!(AngleMapping::default(), AngleMapping::TruncatedSlope);
}

#[test]
fn rounded_uses_full_pulse_range() {
    let mapping = AngleMapping::Rounded;
    assert_eq!(mapping.to_micros(0), 1_000);
    assert_eq!(mapping.to_micros(1), 1_006);
    assert_eq!(mapping.to_micros(45), 1_250);
    assert_eq!(mapping.to_micros(90), 1_500);
    assert_eq!(mapping.to_micros(179), 1_994);
    assert_eq!(mapping.to_micros(180), 2_000);
}

#[test]
fn rounded_map_rounds_half_up() {
    // 9 * 1000 / 180 = 50 exactly; 1 * 1000 / 180 = 5.55..; 2 * 1000 / 180 = 11.11..
    assert_eq!(rounded_map(9, 0, 180, 0, 1_000), 50);
    assert_eq!(rounded_map(1, 0, 180, 0, 1_000), 6);
    assert_eq!(rounded_map(2, 0, 180, 0, 1_000), 11);
    // 1 * 3 / 2 = 1.5 rounds up.
    assert_eq!(rounded_map(1, 0, 2, 0, 3), 2);
}

#[test]
fn angle_round_trip_is_exact_for_both_mappings() {
    for mapping in [AngleMapping::TruncatedSlope, AngleMapping::Rounded] {
        for degrees in 0..=SERVO_MAX_DEGREES {
            let micros = mapping.to_micros(i32::from(degrees));
            assert_eq!(mapping.to_degrees(i32::from(micros)), degrees, "{mapping:?}");
        }
    }
}

#[test]
fn rounded_pulse_round_trip_stays_within_half_a_degree() {
    let mapping = AngleMapping::Rounded;
    for micros in SERVO_MIN_US..=SERVO_MAX_US {
        let degrees = mapping.to_degrees(i32::from(micros));
        let back = mapping.to_micros(i32::from(degrees));
        // Half a degree is 2.77.. µs.
        assert!(micros.abs_diff(back) <= 3, "{micros} -> {degrees} -> {back}");
    }
}

#[test]
fn truncated_to_degrees_saturates_above_1900() {
    let mapping = AngleMapping::TruncatedSlope;
    assert_eq!(mapping.to_degrees(1_225), 45);
    assert_eq!(mapping.to_degrees(1_900), 180);
    assert_eq!(mapping.to_degrees(1_950), 180);
    assert_eq!(mapping.to_degrees(2_000), 180);
    assert_eq!(mapping.to_degrees(400), 0);
}

#[test]
fn rounded_to_degrees_covers_full_range() {
    let mapping = AngleMapping::Rounded;
    assert_eq!(mapping.to_degrees(1_000), 0);
    assert_eq!(mapping.to_degrees(1_500), 90);
    assert_eq!(mapping.to_degrees(2_000), 180);
    assert_eq!(mapping.to_degrees(3_000), 180);
}
