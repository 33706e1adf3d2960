//! Live simulation parameters.
//!
//! Every field is read fresh by the engine on each tick, so a slider change
//! takes effect immediately, including on wavefronts that are already in
//! flight. All external writes go through clamping setters; out-of-range
//! values are corrected locally rather than surfaced as errors.

use crate::constants::{
    DEFAULT_EMISSION_INTERVAL_MS, DEFAULT_FADE_DURATION_MS, DEFAULT_GROWTH_SPEED,
    DEFAULT_HUE_CYCLE_SPEED, DEFAULT_OBSERVER_SPEED, DEFAULT_SOURCE_SPEED,
    MIN_EMISSION_INTERVAL_MS, MIN_FADE_DURATION_MS,
};

#[derive(Clone, Debug)]
pub struct SimConfig {
    emission_interval_ms: f64,
    growth_speed: f32,
    source_speed: f32,
    observer_speed: f32,
    fade_duration_ms: f64,
    hue_cycle_speed: f32,
    current_hue: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            emission_interval_ms: DEFAULT_EMISSION_INTERVAL_MS,
            growth_speed: DEFAULT_GROWTH_SPEED,
            source_speed: DEFAULT_SOURCE_SPEED,
            observer_speed: DEFAULT_OBSERVER_SPEED,
            fade_duration_ms: DEFAULT_FADE_DURATION_MS,
            hue_cycle_speed: DEFAULT_HUE_CYCLE_SPEED,
            current_hue: 0.0,
        }
    }
}

impl SimConfig {
    /// Milliseconds between wavefront emissions.
    pub fn emission_interval_ms(&self) -> f64 {
        self.emission_interval_ms
    }

    /// Wavefront growth in px per millisecond.
    pub fn growth_speed(&self) -> f32 {
        self.growth_speed
    }

    /// Source speed in px per reference frame.
    pub fn source_speed(&self) -> f32 {
        self.source_speed
    }

    /// Observer speed in px per reference frame; zero pins the observer.
    pub fn observer_speed(&self) -> f32 {
        self.observer_speed
    }

    /// Ghost lifetime in milliseconds.
    pub fn fade_duration_ms(&self) -> f64 {
        self.fade_duration_ms
    }

    /// Hue drift in degrees per millisecond.
    pub fn hue_cycle_speed(&self) -> f32 {
        self.hue_cycle_speed
    }

    /// Hue captured by the next emitted wavefront, in [0, 360).
    pub fn current_hue(&self) -> f32 {
        self.current_hue
    }

    pub fn set_emission_interval_ms(&mut self, ms: f64) {
        let clamped = ms.max(MIN_EMISSION_INTERVAL_MS);
        if clamped != ms {
            log::debug!("[config] emission interval {ms} clamped to {clamped}");
        }
        self.emission_interval_ms = clamped;
    }

    pub fn set_growth_speed(&mut self, px_per_ms: f32) {
        self.growth_speed = px_per_ms.max(0.0);
    }

    pub fn set_source_speed(&mut self, px_per_frame: f32) {
        self.source_speed = px_per_frame.max(0.0);
    }

    pub fn set_observer_speed(&mut self, px_per_frame: f32) {
        self.observer_speed = px_per_frame.max(0.0);
    }

    pub fn set_fade_duration_ms(&mut self, ms: f64) {
        let clamped = ms.max(MIN_FADE_DURATION_MS);
        if clamped != ms {
            log::debug!("[config] fade duration {ms} clamped to {clamped}");
        }
        self.fade_duration_ms = clamped;
    }

    pub fn set_hue_cycle_speed(&mut self, deg_per_ms: f32) {
        self.hue_cycle_speed = deg_per_ms.max(0.0);
    }

    pub fn set_current_hue(&mut self, hue_deg: f32) {
        self.current_hue = wrap_hue(hue_deg);
    }

    /// Advance the hue wheel by one tick's worth of drift.
    pub(crate) fn advance_hue(&mut self, dt_ms: f64) {
        if self.hue_cycle_speed > 0.0 {
            self.current_hue = wrap_hue(self.current_hue + self.hue_cycle_speed * dt_ms as f32);
        }
    }
}

#[inline]
fn wrap_hue(hue_deg: f32) -> f32 {
    let wrapped = hue_deg.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 when the input is a hair below zero
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
