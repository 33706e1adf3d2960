//! The simulation engine: entity motion, periodic wavefront emission,
//! arrival detection, ghost/wavefront lifecycle, and the transport state
//! machine.
//!
//! The engine is platform-free and tick-driven. Frontends call
//! [`SimEngine::advance`] from their render loop with the elapsed wall time
//! and the current container size, and drive emission either from a
//! dedicated timer ([`SimEngine::emit_wavefront`]) or through the
//! accumulator cadence ([`SimEngine::pump_emitter`]). All simulation effects
//! are gated on [`Phase::Running`], so a paused engine freezes verbatim and
//! paused wall time never reaches the simulated clock.

use std::time::Duration;

use glam::Vec2;
use rand::prelude::*;

use crate::config::SimConfig;
use crate::constants::{
    DT_REF_MS, MAX_RADIUS_FACTOR, OBSERVER_BODY_RADIUS, OBSERVER_COLOR, SOURCE_BODY_RADIUS,
    SOURCE_COLOR, STICK_TRAVEL_RADIUS,
};
use crate::control::stick_velocity;

/// Container extent in px, sampled fresh every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A container that has not been laid out yet reports zero extent;
    /// clamping and culling are skipped until a real size shows up.
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Cull threshold for wavefronts. Generous so rings visibly leave the
    /// container before they are dropped.
    pub fn max_wavefront_radius(self) -> f32 {
        MAX_RADIUS_FACTOR * self.width.max(self.height)
    }
}

#[derive(Clone, Debug)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: [f32; 3],
}

/// An expanding ring pinned to the point it was emitted from.
#[derive(Clone, Debug)]
pub struct Wavefront {
    pub origin: Vec2,
    pub radius: f32,
    pub hue: f32,
    pub created_at_ms: f64,
    arrived: bool,
}

impl Wavefront {
    /// True once this wavefront has produced its ghost; it keeps growing
    /// afterwards but can never produce another.
    pub fn has_arrived(&self) -> bool {
        self.arrived
    }
}

/// A recorded perception event: where the observer stood when a wavefront
/// reached it, tinted with that wavefront's hue.
#[derive(Clone, Debug)]
pub struct Ghost {
    pub position: Vec2,
    pub hue: f32,
    pub created_at_ms: f64,
}

impl Ghost {
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.created_at_ms
    }

    /// Linear fade from 1 at creation to 0 at `fade_ms`.
    pub fn opacity(&self, now_ms: f64, fade_ms: f64) -> f32 {
        (1.0 - self.age_ms(now_ms) / fade_ms).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Stopped,
    Running,
    Paused,
}

/// Per-tick creation/removal counts for the stats display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub ghosts_created: usize,
    pub wavefronts_removed: usize,
    pub ghosts_removed: usize,
}

pub struct SimEngine {
    config: SimConfig,
    phase: Phase,
    started: bool,
    clock_ms: f64,
    emit_accum_ms: f64,
    source: Option<Body>,
    observer: Option<Body>,
    wavefronts: Vec<Wavefront>,
    ghosts: Vec<Ghost>,
    rng: StdRng,
}

impl SimEngine {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            config,
            phase: Phase::Stopped,
            started: false,
            clock_ms: 0.0,
            emit_accum_ms: 0.0,
            source: None,
            observer: None,
            wavefronts: Vec::new(),
            ghosts: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Live parameter updates go through the config's clamping setters.
    pub fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// True from the first start onwards, across pause and reset.
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Simulated time in ms; advances only while running.
    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn source(&self) -> Option<&Body> {
        self.source.as_ref()
    }

    pub fn observer(&self) -> Option<&Body> {
        self.observer.as_ref()
    }

    /// For embedders that reposition entities directly.
    pub fn source_mut(&mut self) -> Option<&mut Body> {
        self.source.as_mut()
    }

    pub fn observer_mut(&mut self) -> Option<&mut Body> {
        self.observer.as_mut()
    }

    /// Live wavefronts in emission order.
    pub fn wavefronts(&self) -> &[Wavefront] {
        &self.wavefronts
    }

    /// Live ghosts in creation order.
    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    // ---------------- transport ----------------

    /// `Stopped -> Running`: fresh random bodies, cleared collections, zeroed
    /// clock and emission accumulator. Ignored in any other phase.
    pub fn start(&mut self, bounds: Bounds) {
        if self.phase != Phase::Stopped {
            log::debug!("[engine] start ignored in {:?}", self.phase);
            return;
        }
        self.spawn_bodies(bounds);
        self.wavefronts.clear();
        self.ghosts.clear();
        self.clock_ms = 0.0;
        self.emit_accum_ms = 0.0;
        self.started = true;
        self.phase = Phase::Running;
        log::info!(
            "[engine] started ({:.0}x{:.0})",
            bounds.width,
            bounds.height
        );
    }

    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
            log::info!("[engine] paused at {:.0} ms", self.clock_ms);
        } else {
            log::debug!("[engine] pause ignored in {:?}", self.phase);
        }
    }

    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
            log::info!("[engine] resumed at {:.0} ms", self.clock_ms);
        } else {
            log::debug!("[engine] resume ignored in {:?}", self.phase);
        }
    }

    /// Convenience for a single pause/resume control.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            Phase::Stopped => log::debug!("[engine] toggle_pause ignored while stopped"),
        }
    }

    /// `Running|Paused -> Stopped`: collections cleared, bodies
    /// re-randomized. A reset before the first start is a no-op; no bodies
    /// exist yet.
    pub fn reset(&mut self, bounds: Bounds) {
        if !self.started {
            log::debug!("[engine] reset ignored before first start");
            return;
        }
        self.spawn_bodies(bounds);
        self.wavefronts.clear();
        self.ghosts.clear();
        self.clock_ms = 0.0;
        self.emit_accum_ms = 0.0;
        self.phase = Phase::Stopped;
        log::info!("[engine] reset");
    }

    // ---------------- emission ----------------

    /// One emission at the source's current position, hue captured live.
    /// No-op unless running; the external timer may keep a stray firing in
    /// flight across a pause.
    pub fn emit_wavefront(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(source) = &self.source else { return };
        self.wavefronts.push(Wavefront {
            origin: source.position,
            radius: 0.0,
            hue: self.config.current_hue(),
            created_at_ms: self.clock_ms,
            arrived: false,
        });
    }

    /// Accumulator-driven cadence for hosts without a dedicated timer task.
    /// The remainder survives pause/resume, so cadence phase is preserved
    /// rather than restarted, and a small interval can fire several
    /// emissions from a single pump.
    pub fn pump_emitter(&mut self, dt: Duration) {
        if self.phase != Phase::Running {
            return;
        }
        self.emit_accum_ms += dt.as_secs_f64() * 1000.0;
        while self.emit_accum_ms >= self.config.emission_interval_ms() {
            self.emit_accum_ms -= self.config.emission_interval_ms();
            self.emit_wavefront();
        }
    }

    // ---------------- stick input ----------------

    /// Stick input for the source body. The velocity persists after release.
    pub fn drag_source(&mut self, offset: Vec2) {
        let speed = self.config.source_speed();
        if let Some(source) = &mut self.source {
            source.velocity = stick_velocity(offset, STICK_TRAVEL_RADIUS, speed);
        }
    }

    /// Stick input for the observer; forced to rest while its speed is zero,
    /// overriding any residual drag state.
    pub fn drag_observer(&mut self, offset: Vec2) {
        let speed = self.config.observer_speed();
        if let Some(observer) = &mut self.observer {
            observer.velocity = if speed <= 0.0 {
                Vec2::ZERO
            } else {
                stick_velocity(offset, STICK_TRAVEL_RADIUS, speed)
            };
        }
    }

    // ---------------- tick ----------------

    /// One render tick: motion, then growth + arrival, then lifecycle
    /// pruning, in that order, so this tick's growth is visible to this
    /// tick's crossing test.
    pub fn advance(&mut self, dt: Duration, bounds: Bounds) -> TickReport {
        let mut report = TickReport::default();
        if self.phase != Phase::Running {
            return report;
        }
        let dt_ms = dt.as_secs_f64() * 1000.0;
        if dt_ms <= 0.0 {
            return report;
        }
        self.clock_ms += dt_ms;
        self.config.advance_hue(dt_ms);

        // Motion. The observer is pinned while its speed sits at zero, no
        // matter what the stick last said.
        if self.config.observer_speed() <= 0.0 {
            if let Some(observer) = &mut self.observer {
                observer.velocity = Vec2::ZERO;
            }
        }
        let frame_scale = dt_ms as f32 / DT_REF_MS;
        if let Some(source) = &mut self.source {
            integrate(source, frame_scale, bounds);
        }
        if let Some(observer) = &mut self.observer {
            integrate(observer, frame_scale, bounds);
        }

        // Growth + arrival. The crossing test catches the tick in which the
        // expanding boundary passed the observer's distance; equality on the
        // upper bound keeps coarse steps from dropping perception events.
        let growth = self.config.growth_speed() * dt_ms as f32;
        let observer_pos = self.observer.as_ref().map(|b| b.position);
        for w in &mut self.wavefronts {
            let prev = w.radius;
            w.radius = prev + growth;
            if w.arrived {
                continue;
            }
            let Some(pos) = observer_pos else { continue };
            let d = w.origin.distance(pos);
            // A wavefront born on top of the observer arrives on its first
            // growth tick; the crossing test alone would never fire at d=0.
            let crossed = if d <= f32::EPSILON {
                w.radius > prev
            } else {
                prev < d && d <= w.radius
            };
            if crossed {
                self.ghosts.push(Ghost {
                    position: pos,
                    hue: w.hue,
                    created_at_ms: self.clock_ms,
                });
                w.arrived = true;
                report.ghosts_created += 1;
            }
        }

        // Lifecycle pruning. `retain` keeps insertion order.
        if bounds.is_valid() {
            let max_radius = bounds.max_wavefront_radius();
            let before = self.wavefronts.len();
            self.wavefronts.retain(|w| w.radius <= max_radius);
            report.wavefronts_removed = before - self.wavefronts.len();
        }
        let fade_ms = self.config.fade_duration_ms();
        let now_ms = self.clock_ms;
        let before = self.ghosts.len();
        self.ghosts.retain(|g| g.age_ms(now_ms) < fade_ms);
        report.ghosts_removed = before - self.ghosts.len();

        report
    }

    // ---------------- internals ----------------

    fn spawn_bodies(&mut self, bounds: Bounds) {
        let (w, h) = if bounds.is_valid() {
            (bounds.width, bounds.height)
        } else {
            (1.0, 1.0)
        };
        let source_speed = self.config.source_speed();
        let observer_speed = self.config.observer_speed();
        self.source = Some(Body {
            position: Vec2::new(self.rng.gen_range(0.0..w), self.rng.gen_range(0.0..h)),
            velocity: self.random_heading(source_speed),
            radius: SOURCE_BODY_RADIUS,
            color: SOURCE_COLOR,
        });
        self.observer = Some(Body {
            position: Vec2::new(self.rng.gen_range(0.0..w), self.rng.gen_range(0.0..h)),
            velocity: self.random_heading(observer_speed),
            radius: OBSERVER_BODY_RADIUS,
            color: OBSERVER_COLOR,
        });
    }

    fn random_heading(&mut self, speed: f32) -> Vec2 {
        if speed <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::from_angle(self.rng.gen_range(0.0..std::f32::consts::TAU)) * speed
    }
}

/// Advance one body and reflect it off the container walls. With no valid
/// bounds the body keeps drifting unclamped until layout settles.
fn integrate(body: &mut Body, frame_scale: f32, bounds: Bounds) {
    body.position += body.velocity * frame_scale;
    if !bounds.is_valid() {
        return;
    }
    let min = Vec2::splat(body.radius);
    let max = Vec2::new(bounds.width - body.radius, bounds.height - body.radius);
    if max.x < min.x || max.y < min.y {
        // container smaller than the body
        return;
    }
    if body.position.x < min.x {
        body.position.x = min.x;
        body.velocity.x = -body.velocity.x;
    } else if body.position.x > max.x {
        body.position.x = max.x;
        body.velocity.x = -body.velocity.x;
    }
    if body.position.y < min.y {
        body.position.y = min.y;
        body.velocity.y = -body.velocity.y;
    } else if body.position.y > max.y {
        body.position.y = max.y;
        body.velocity.y = -body.velocity.y;
    }
}
