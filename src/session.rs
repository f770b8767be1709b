//! Session controller: owns the game state and gates everything that moves.
//!
//! All mutation goes through `fire`, `set_pointer`, `set_engaged` and
//! `advance_to`.  Each call runs to completion, so no locking is involved.
//! Rendering reads `snapshot()` and never mutates.

use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compute;
use crate::config::GameConfig;
use crate::entities::{
    Bullet, Enemy, GameEvent, GameState, GridPosition, PixelPosition, SessionMode, SessionState,
    Ship, Snapshot, SpawnPolicy,
};
use crate::error::ConfigError;
use crate::pointer::PointerTracker;
use crate::scheduler::{PeriodicTask, Scheduler};

pub struct Session<R = StdRng> {
    state: GameState,
    mode: SessionMode,
    spawn_policy: SpawnPolicy,
    scheduler: Scheduler,
    pointer: PointerTracker,
    rng: R,
    /// Virtual clock, measured from session start.
    now: Duration,
    events: Vec<GameEvent>,
}

impl Session<StdRng> {
    /// Session seeded from `config.seed`, or from entropy when unset.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(config: &GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let dimension = config.dimension();
        let state = GameState {
            ship: Ship {
                position: GridPosition::new(0, 0),
            },
            bullet: Bullet::NONE,
            enemy: Enemy::NONE,
            score: 0,
            session: config.mode.initial_state(),
            dimension,
        };
        let mut scheduler = Scheduler::new(config);
        scheduler.sync(&state, Duration::ZERO);
        info!(
            "session started: {}x{} grid, {:?}, spawn policy {:?}",
            dimension, dimension, config.mode, config.spawn_policy
        );
        Ok(Self {
            state,
            mode: config.mode,
            spawn_policy: config.spawn_policy,
            scheduler,
            pointer: PointerTracker::new(
                config.cell_size_px,
                dimension,
                config.clamp_pointer,
                config.pointer_sample_hz,
            ),
            rng,
            now: Duration::ZERO,
            events: Vec::new(),
        })
    }

    // ── Read side ─────────────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> i64 {
        self.state.score
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Fire if no bullet is live.
    ///
    /// Works while paused too; the new bullet stays put until play resumes
    /// because its ascent timer is gated on the session.
    pub fn fire(&mut self) {
        let (next, event) = compute::fire(&self.state);
        self.state = next;
        if let Some(event) = event {
            debug!("fired from {:?}", self.state.ship.position);
            self.events.push(event);
            self.after_entity_change();
        }
    }

    /// Move the ship to the cell under the pointer.  Ignored while paused.
    pub fn set_pointer(&mut self, pixel_x: i32, pixel_y: i32) {
        if !self.state.is_running() {
            return;
        }
        if let Some(cell) = self.pointer.sample(PixelPosition::new(pixel_x, pixel_y), self.now) {
            self.state = compute::move_ship(&self.state, cell);
        }
    }

    /// Pointer entered (`true`) or left (`false`) the play field.
    pub fn set_engaged(&mut self, engaged: bool) {
        if self.mode == SessionMode::AlwaysOn {
            return;
        }
        let target = if engaged {
            SessionState::Running
        } else {
            SessionState::Paused
        };
        if self.state.session == target {
            return;
        }
        self.state.session = target;
        match target {
            SessionState::Running => {
                info!("resumed at {:?}", self.now);
                self.events.push(GameEvent::Resumed);
            }
            SessionState::Paused => {
                info!("paused at {:?}", self.now);
                self.pointer.clear_pending();
                self.events.push(GameEvent::Paused);
            }
        }
        self.scheduler.sync(&self.state, self.now);
    }

    // ── Clock ─────────────────────────────────────────────────────────────────

    /// Run every timer due at or before `now`, in due-time order.
    ///
    /// A `now` earlier than the current clock is ignored.
    pub fn advance_to(&mut self, now: Duration) {
        if now < self.now {
            return;
        }
        while let Some((task, due)) = self.scheduler.next_due(now) {
            self.now = due;
            self.scheduler.timer_mut(task).reschedule();
            self.run_task(task);
            self.scheduler.sync(&self.state, self.now);
        }
        self.now = now;

        if self.state.is_running() {
            if let Some(cell) = self.pointer.flush(self.now) {
                self.state = compute::move_ship(&self.state, cell);
            }
        }
    }

    pub fn advance_by(&mut self, delta: Duration) {
        self.advance_to(self.now + delta);
    }

    fn run_task(&mut self, task: PeriodicTask) {
        let (next, event) = match task {
            PeriodicTask::BulletAscent => compute::advance_bullet(&self.state),
            PeriodicTask::EnemyDescent => compute::advance_enemy(&self.state),
            PeriodicTask::EnemySpawn => {
                compute::spawn_enemy(&self.state, self.spawn_policy, &mut self.rng)
            }
        };
        self.state = next;
        if let Some(event) = event {
            match event {
                GameEvent::EnemyEscaped { penalty } => {
                    info!("enemy escaped, -{} (score {})", penalty, self.state.score)
                }
                other => debug!("{:?} at {:?}: {:?}", task, self.now, other),
            }
            self.events.push(event);
        }
        self.after_entity_change();
    }

    /// Collision evaluation after any bullet or enemy change.
    fn after_entity_change(&mut self) {
        let (next, events) = compute::resolve_collisions(&self.state);
        self.state = next;
        for event in &events {
            info!("{:?} (score {})", event, self.state.score);
        }
        self.events.extend(events);
        self.scheduler.sync(&self.state, self.now);
    }
}
