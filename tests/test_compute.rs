use grid_shooter::compute::*;
use grid_shooter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    GameState {
        ship: Ship { position: GridPosition::new(10, 10) },
        bullet: Bullet::NONE,
        enemy: Enemy::NONE,
        score: 0,
        session: SessionState::Running,
        dimension: 20,
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn fire_places_bullet_above_ship() {
    let s = make_state();
    let (s2, event) = fire(&s);
    assert_eq!(s2.bullet.position, GridPosition::new(10, 9));
    assert_eq!(event, Some(GameEvent::Fired { at: GridPosition::new(10, 9) }));
}

#[test]
fn fire_twice_keeps_single_bullet() {
    let s = make_state();
    let (s2, _) = fire(&s);
    let mut moved = s2;
    moved.ship.position = GridPosition::new(3, 3);
    let (s3, event) = fire(&moved);
    assert_eq!(event, None);
    assert_eq!(s3.bullet.position, GridPosition::new(10, 9)); // untouched
}

#[test]
fn fire_from_top_row_is_ignored() {
    let mut s = make_state();
    s.ship.position = GridPosition::new(4, 0);
    let (s2, event) = fire(&s);
    assert_eq!(event, None);
    assert!(!s2.bullet.is_live());
}

#[test]
fn fire_from_off_field_ship_is_ignored() {
    let mut s = make_state();
    s.ship.position = GridPosition::new(25, 10);
    let (s2, event) = fire(&s);
    assert_eq!(event, None);
    assert_eq!(s2.bullet, Bullet::NONE);
}

#[test]
fn fire_does_not_mutate_original() {
    let s = make_state();
    let _ = fire(&s);
    assert!(!s.bullet.is_live());
}

// ── advance_bullet ────────────────────────────────────────────────────────────

#[test]
fn bullet_moves_up_one_row() {
    let mut s = make_state();
    s.bullet = Bullet::at(GridPosition::new(4, 7));
    let (s2, event) = advance_bullet(&s);
    assert_eq!(s2.bullet.position, GridPosition::new(4, 6));
    assert_eq!(event, None);
}

#[test]
fn bullet_reaches_top_after_ship_y_minus_one_ticks() {
    let mut s = make_state(); // ship.y = 10
    let (fired, _) = fire(&s);
    s = fired;
    for _ in 0..9 {
        let (next, event) = advance_bullet(&s);
        assert_eq!(event, None);
        s = next;
    }
    assert_eq!(s.bullet.position, GridPosition::new(10, 0));

    let (s, event) = advance_bullet(&s);
    assert_eq!(event, Some(GameEvent::BulletExpired));
    assert_eq!(s.bullet.position, OFF_GRID);
    assert_eq!(s.score, 0);
}

#[test]
fn advance_bullet_without_bullet_is_noop() {
    let s = make_state();
    let (s2, event) = advance_bullet(&s);
    assert_eq!(s2, s);
    assert_eq!(event, None);
}

// ── spawn_enemy ───────────────────────────────────────────────────────────────

#[test]
fn spawn_places_enemy_on_top_row() {
    let s = make_state();
    let mut rng = seeded_rng();
    for _ in 0..50 {
        let (s2, event) = spawn_enemy(&s, SpawnPolicy::Overwrite, &mut rng);
        let at = s2.enemy.position;
        assert_eq!(at.y, 0);
        assert!((0..20).contains(&at.x));
        assert_eq!(event, Some(GameEvent::EnemySpawned { at }));
    }
}

#[test]
fn spawn_overwrites_live_enemy_without_penalty() {
    let mut s = make_state();
    s.enemy = Enemy::at(GridPosition::new(3, 12));
    let (s2, event) = spawn_enemy(&s, SpawnPolicy::Overwrite, &mut seeded_rng());
    assert_eq!(s2.enemy.position.y, 0);
    assert_eq!(s2.score, 0);
    match event {
        Some(GameEvent::EnemyReplaced { previous, at }) => {
            assert_eq!(previous, GridPosition::new(3, 12));
            assert_eq!(at, s2.enemy.position);
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn spawn_suppressed_while_enemy_live() {
    let mut s = make_state();
    s.enemy = Enemy::at(GridPosition::new(3, 12));
    let (s2, event) = spawn_enemy(&s, SpawnPolicy::Suppress, &mut seeded_rng());
    assert_eq!(s2.enemy.position, GridPosition::new(3, 12));
    assert_eq!(event, Some(GameEvent::SpawnSuppressed));
}

#[test]
fn spawn_suppress_policy_still_spawns_when_empty() {
    let s = make_state();
    let (s2, _) = spawn_enemy(&s, SpawnPolicy::Suppress, &mut seeded_rng());
    assert!(s2.enemy.is_live());
}

// ── advance_enemy ─────────────────────────────────────────────────────────────

#[test]
fn enemy_moves_down_one_row() {
    let mut s = make_state();
    s.enemy = Enemy::at(GridPosition::new(6, 0));
    let (s2, event) = advance_enemy(&s);
    assert_eq!(s2.enemy.position, GridPosition::new(6, 1));
    assert_eq!(event, None);
}

#[test]
fn enemy_escapes_exactly_on_reaching_bottom() {
    let mut s = make_state();
    s.enemy = Enemy::at(GridPosition::new(6, 0));
    for _ in 0..19 {
        let (next, event) = advance_enemy(&s);
        assert_eq!(event, None);
        assert!(next.enemy.is_live());
        s = next;
    }
    assert_eq!(s.enemy.position, GridPosition::new(6, 19));
    assert_eq!(s.score, 0);

    // 20th tick would put it on y = D
    let (s, event) = advance_enemy(&s);
    assert_eq!(event, Some(GameEvent::EnemyEscaped { penalty: MISS_PENALTY }));
    assert_eq!(s.enemy.position, OFF_GRID);
    assert_eq!(s.score, -200);
}

// ── resolve_collisions ────────────────────────────────────────────────────────

#[test]
fn bullet_hits_enemy_rewards_and_clears_both() {
    let mut s = make_state();
    s.bullet = Bullet::at(GridPosition::new(3, 5));
    s.enemy = Enemy::at(GridPosition::new(3, 5));
    let (s2, events) = resolve_collisions(&s);
    assert_eq!(s2.score, 100);
    assert!(!s2.bullet.is_live());
    assert!(!s2.enemy.is_live());
    assert_eq!(
        events,
        vec![GameEvent::EnemyDestroyed { at: GridPosition::new(3, 5), reward: HIT_REWARD }]
    );
}

#[test]
fn enemy_rams_ship_penalises_and_clears_enemy() {
    let mut s = make_state();
    s.ship.position = GridPosition::new(2, 2);
    s.enemy = Enemy::at(GridPosition::new(2, 2));
    let (s2, events) = resolve_collisions(&s);
    assert_eq!(s2.score, -1000);
    assert!(!s2.enemy.is_live());
    assert_eq!(s2.ship.position, GridPosition::new(2, 2));
    assert_eq!(
        events,
        vec![GameEvent::ShipHit { at: GridPosition::new(2, 2), penalty: SHIP_HIT_PENALTY }]
    );
}

#[test]
fn ship_check_runs_before_bullet_check() {
    // All three on one cell: the ship collision consumes the enemy, the
    // bullet survives and no reward is paid.
    let mut s = make_state();
    s.ship.position = GridPosition::new(4, 4);
    s.bullet = Bullet::at(GridPosition::new(4, 4));
    s.enemy = Enemy::at(GridPosition::new(4, 4));
    let (s2, events) = resolve_collisions(&s);
    assert_eq!(s2.score, -1000);
    assert!(s2.bullet.is_live());
    assert_eq!(events.len(), 1);
}

#[test]
fn no_collision_when_enemy_absent() {
    let mut s = make_state();
    s.bullet = Bullet::at(GridPosition::new(10, 9));
    let (s2, events) = resolve_collisions(&s);
    assert_eq!(s2, s);
    assert!(events.is_empty());
}

#[test]
fn sentinel_never_matches_sentinel() {
    // Ship parked on the sentinel cell with nothing live around it
    let mut s = make_state();
    s.ship.position = OFF_GRID;
    let (s2, events) = resolve_collisions(&s);
    assert_eq!(s2.score, 0);
    assert!(events.is_empty());
}

#[test]
fn near_miss_is_not_a_hit() {
    let mut s = make_state();
    s.bullet = Bullet::at(GridPosition::new(3, 6));
    s.enemy = Enemy::at(GridPosition::new(3, 5));
    let (s2, events) = resolve_collisions(&s);
    assert!(s2.bullet.is_live() && s2.enemy.is_live());
    assert!(events.is_empty());
}
