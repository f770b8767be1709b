//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState` together with the events the step produced.  Side effects are
//! limited to the injected RNG.

use log::debug;
use rand::Rng;

use crate::entities::{Bullet, Enemy, GameEvent, GameState, GridPosition, SpawnPolicy};
use crate::grid;

// ── Scoring table ────────────────────────────────────────────────────────────

/// Awarded for shooting the enemy down.
pub const HIT_REWARD: i64 = 100;
/// Charged when the enemy rams the ship.
pub const SHIP_HIT_PENALTY: i64 = 1000;
/// Charged when the enemy reaches the bottom of the field.
pub const MISS_PENALTY: i64 = 200;

// ── Input-driven transitions ─────────────────────────────────────────────────

/// Fire a bullet from the cell directly above the ship.
///
/// Ignored while a bullet is live, and when that cell is not on the grid.
pub fn fire(state: &GameState) -> (GameState, Option<GameEvent>) {
    if state.bullet.is_live() {
        return (*state, None);
    }
    let ship = state.ship.position;
    let at = GridPosition::new(ship.x, ship.y - 1);
    if !grid::in_bounds(at, state.dimension) {
        debug!("fire ignored: bullet cell {:?} is off the field", at);
        return (*state, None);
    }
    let next = GameState {
        bullet: Bullet::at(at),
        ..*state
    };
    (next, Some(GameEvent::Fired { at }))
}

pub fn move_ship(state: &GameState, to: GridPosition) -> GameState {
    let mut next = *state;
    next.ship.position = to;
    next
}

// ── Timer-driven transitions ─────────────────────────────────────────────────

/// One bullet-ascent tick: move up a row, or expire from the top row.
pub fn advance_bullet(state: &GameState) -> (GameState, Option<GameEvent>) {
    if !state.bullet.is_live() {
        return (*state, None);
    }
    let pos = state.bullet.position;
    if pos.y == 0 {
        let next = GameState {
            bullet: Bullet::NONE,
            ..*state
        };
        return (next, Some(GameEvent::BulletExpired));
    }
    let next = GameState {
        bullet: Bullet::at(GridPosition::new(pos.x, pos.y - 1)),
        ..*state
    };
    (next, None)
}

/// One enemy-spawn tick: a new enemy at a uniformly random column of row 0.
pub fn spawn_enemy(
    state: &GameState,
    policy: SpawnPolicy,
    rng: &mut impl Rng,
) -> (GameState, Option<GameEvent>) {
    if state.enemy.is_live() && policy == SpawnPolicy::Suppress {
        return (*state, Some(GameEvent::SpawnSuppressed));
    }
    let at = GridPosition::new(rng.gen_range(0..state.dimension), 0);
    let event = if state.enemy.is_live() {
        GameEvent::EnemyReplaced {
            previous: state.enemy.position,
            at,
        }
    } else {
        GameEvent::EnemySpawned { at }
    };
    let next = GameState {
        enemy: Enemy::at(at),
        ..*state
    };
    (next, Some(event))
}

/// One enemy-descent tick: move down a row, or escape on reaching the bottom.
pub fn advance_enemy(state: &GameState) -> (GameState, Option<GameEvent>) {
    if !state.enemy.is_live() {
        return (*state, None);
    }
    let pos = state.enemy.position;
    let y = pos.y + 1;
    if y >= state.dimension {
        let next = GameState {
            enemy: Enemy::NONE,
            score: state.score - MISS_PENALTY,
            ..*state
        };
        return (
            next,
            Some(GameEvent::EnemyEscaped {
                penalty: MISS_PENALTY,
            }),
        );
    }
    let next = GameState {
        enemy: Enemy::at(GridPosition::new(pos.x, y)),
        ..*state
    };
    (next, None)
}

// ── Collision & scoring ──────────────────────────────────────────────────────

/// Evaluate ship-vs-enemy, then bullet-vs-enemy.
///
/// The second check only sees an enemy the first one left alive, so at most
/// one of them fires per evaluation.
pub fn resolve_collisions(state: &GameState) -> (GameState, Vec<GameEvent>) {
    let mut next = *state;
    let mut events = Vec::new();

    if next.enemy.is_live() && grid::equals(next.ship.position, next.enemy.position) {
        let at = next.enemy.position;
        next.score -= SHIP_HIT_PENALTY;
        next.enemy = Enemy::NONE;
        events.push(GameEvent::ShipHit {
            at,
            penalty: SHIP_HIT_PENALTY,
        });
    }

    if next.enemy.is_live()
        && next.bullet.is_live()
        && grid::equals(next.bullet.position, next.enemy.position)
    {
        let at = next.enemy.position;
        next.score += HIT_REWARD;
        next.enemy = Enemy::NONE;
        next.bullet = Bullet::NONE;
        events.push(GameEvent::EnemyDestroyed {
            at,
            reward: HIT_REWARD,
        });
    }

    (next, events)
}
