//! Movement scheduler: three independent periodic timers on a virtual clock.
//!
//! A timer is armed while its enable condition holds and cancelled as soon as
//! it stops holding.  Re-arming always starts a fresh period, so nothing is
//! fast-forwarded after a pause.

use std::time::Duration;

use log::debug;

use crate::config::GameConfig;
use crate::entities::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PeriodicTask {
    BulletAscent,
    EnemyDescent,
    EnemySpawn,
}

impl PeriodicTask {
    /// Also the tie-break order for timers due at the same instant.
    pub const ALL: [PeriodicTask; 3] = [
        PeriodicTask::BulletAscent,
        PeriodicTask::EnemyDescent,
        PeriodicTask::EnemySpawn,
    ];

    pub fn is_enabled(&self, state: &GameState) -> bool {
        state.is_running()
            && match self {
                PeriodicTask::BulletAscent => state.bullet.is_live(),
                PeriodicTask::EnemyDescent => state.enemy.is_live(),
                PeriodicTask::EnemySpawn => true,
            }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    period: Duration,
    next_due: Option<Duration>,
}

impl Timer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Clock time of the next firing, `None` while disarmed.
    pub fn next_due(&self) -> Option<Duration> {
        self.next_due
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start a fresh period at `now`.
    pub fn arm(&mut self, now: Duration) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    /// Push an armed timer one period past its current due time.
    pub fn reschedule(&mut self) {
        if let Some(due) = self.next_due {
            self.next_due = Some(due + self.period);
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scheduler {
    bullet: Timer,
    enemy: Timer,
    spawn: Timer,
}

impl Scheduler {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bullet: Timer::new(config.bullet_period),
            enemy: Timer::new(config.enemy_period),
            spawn: Timer::new(config.spawn_period),
        }
    }

    /// Read-only view of one task's timer.
    pub fn timer(&self, task: PeriodicTask) -> &Timer {
        match task {
            PeriodicTask::BulletAscent => &self.bullet,
            PeriodicTask::EnemyDescent => &self.enemy,
            PeriodicTask::EnemySpawn => &self.spawn,
        }
    }

    pub(crate) fn timer_mut(&mut self, task: PeriodicTask) -> &mut Timer {
        match task {
            PeriodicTask::BulletAscent => &mut self.bullet,
            PeriodicTask::EnemyDescent => &mut self.enemy,
            PeriodicTask::EnemySpawn => &mut self.spawn,
        }
    }

    /// Re-evaluate every enable condition against `state`.
    ///
    /// Newly enabled timers are armed one period after `now`; disabled ones
    /// are cancelled.  Timers whose condition did not change keep their phase.
    pub fn sync(&mut self, state: &GameState, now: Duration) {
        for task in PeriodicTask::ALL {
            let enabled = task.is_enabled(state);
            let timer = self.timer_mut(task);
            match (enabled, timer.is_armed()) {
                (true, false) => {
                    timer.arm(now);
                    debug!("{:?} armed at {:?}, due {:?}", task, now, timer.next_due());
                }
                (false, true) => {
                    timer.cancel();
                    debug!("{:?} cancelled at {:?}", task, now);
                }
                _ => {}
            }
        }
    }

    /// The earliest armed task due at or before `deadline`.
    pub fn next_due(&self, deadline: Duration) -> Option<(PeriodicTask, Duration)> {
        PeriodicTask::ALL
            .iter()
            .filter_map(|&task| self.timer(task).next_due().map(|due| (task, due)))
            .filter(|&(_, due)| due <= deadline)
            .min_by_key(|&(_, due)| due)
    }
}
