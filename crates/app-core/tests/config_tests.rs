// Tests for the clamping config setters: out-of-range values are corrected
// locally instead of being surfaced as errors.

use app_core::{SimConfig, MIN_EMISSION_INTERVAL_MS, MIN_FADE_DURATION_MS};

#[test]
fn defaults_are_sane() {
    let config = SimConfig::default();
    assert!(config.emission_interval_ms() >= MIN_EMISSION_INTERVAL_MS);
    assert!(config.fade_duration_ms() >= MIN_FADE_DURATION_MS);
    assert!(config.growth_speed() > 0.0);
    assert!(config.source_speed() > 0.0);
    assert!(config.observer_speed() > 0.0);
    assert!(config.current_hue() >= 0.0 && config.current_hue() < 360.0);
}

#[test]
fn non_positive_intervals_clamp_to_the_floor() {
    let mut config = SimConfig::default();
    config.set_emission_interval_ms(0.0);
    assert_eq!(config.emission_interval_ms(), MIN_EMISSION_INTERVAL_MS);
    config.set_emission_interval_ms(-250.0);
    assert_eq!(config.emission_interval_ms(), MIN_EMISSION_INTERVAL_MS);
    config.set_emission_interval_ms(f64::NAN);
    assert_eq!(
        config.emission_interval_ms(),
        MIN_EMISSION_INTERVAL_MS,
        "NaN must not poison the emitter cadence"
    );
    config.set_emission_interval_ms(75.0);
    assert_eq!(config.emission_interval_ms(), 75.0);
}

#[test]
fn non_positive_fade_durations_clamp_to_the_floor() {
    let mut config = SimConfig::default();
    config.set_fade_duration_ms(0.0);
    assert_eq!(config.fade_duration_ms(), MIN_FADE_DURATION_MS);
    config.set_fade_duration_ms(-1.0);
    assert_eq!(config.fade_duration_ms(), MIN_FADE_DURATION_MS);
    config.set_fade_duration_ms(2500.0);
    assert_eq!(config.fade_duration_ms(), 2500.0);
}

#[test]
fn negative_speeds_clamp_to_zero() {
    let mut config = SimConfig::default();
    config.set_growth_speed(-1.0);
    assert_eq!(config.growth_speed(), 0.0);
    config.set_source_speed(-3.0);
    assert_eq!(config.source_speed(), 0.0);
    config.set_observer_speed(-0.5);
    assert_eq!(config.observer_speed(), 0.0);
    config.set_hue_cycle_speed(-0.1);
    assert_eq!(config.hue_cycle_speed(), 0.0);
    config.set_growth_speed(f32::NAN);
    assert_eq!(config.growth_speed(), 0.0);
}

#[test]
fn hue_wraps_into_the_color_wheel() {
    let mut config = SimConfig::default();
    config.set_current_hue(400.0);
    assert!((config.current_hue() - 40.0).abs() < 1e-4);
    config.set_current_hue(-30.0);
    assert!((config.current_hue() - 330.0).abs() < 1e-4);
    config.set_current_hue(360.0);
    assert_eq!(config.current_hue(), 0.0);
}
