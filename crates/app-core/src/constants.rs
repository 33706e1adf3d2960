// Shared simulation tuning constants used by both web and native frontends.

// Timebase
pub const DT_REF_MS: f32 = 1000.0 / 60.0; // velocities are expressed per nominal 60 Hz frame

// Wavefront lifecycle
pub const MAX_RADIUS_FACTOR: f32 = 2.0; // cull once radius exceeds factor * max(container dimension)

// Config clamp floors
pub const MIN_EMISSION_INTERVAL_MS: f64 = 10.0; // guards against an infinite-rate emitter
pub const MIN_FADE_DURATION_MS: f64 = 50.0; // guards against instantly-expiring ghosts

// Interaction
pub const STICK_TRAVEL_RADIUS: f32 = 40.0; // max stick offset in px before the drag vector clamps

// Ring/dot palette used by both renderers
pub const RING_SATURATION: f32 = 0.8;
pub const RING_LIGHTNESS: f32 = 0.6;

// Bodies
pub const SOURCE_BODY_RADIUS: f32 = 10.0;
pub const OBSERVER_BODY_RADIUS: f32 = 8.0;
pub const SOURCE_COLOR: [f32; 3] = [1.0, 0.82, 0.25]; // warm emitter
pub const OBSERVER_COLOR: [f32; 3] = [0.45, 0.85, 1.0]; // cool observer

// Default config values
pub const DEFAULT_EMISSION_INTERVAL_MS: f64 = 400.0;
pub const DEFAULT_GROWTH_SPEED: f32 = 0.12; // px per ms
pub const DEFAULT_SOURCE_SPEED: f32 = 2.2; // px per reference frame
pub const DEFAULT_OBSERVER_SPEED: f32 = 1.6; // px per reference frame
pub const DEFAULT_FADE_DURATION_MS: f64 = 4000.0;
pub const DEFAULT_HUE_CYCLE_SPEED: f32 = 0.02; // degrees per ms
