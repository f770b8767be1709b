use grid_shooter::entities::*;
use grid_shooter::grid::*;

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

// ── to_grid ───────────────────────────────────────────────────────────────────

#[test]
fn to_grid_floors_inside_cell() {
    assert_eq!(to_grid(PixelPosition::new(0, 0), 20), GridPosition::new(0, 0));
    assert_eq!(to_grid(PixelPosition::new(19, 19), 20), GridPosition::new(0, 0));
    assert_eq!(to_grid(PixelPosition::new(20, 39), 20), GridPosition::new(1, 1));
    assert_eq!(to_grid(PixelPosition::new(205, 219), 20), GridPosition::new(10, 10));
}

#[test]
fn to_grid_floors_negative_pixels() {
    // One pixel left of the field is cell -1, not cell 0
    assert_eq!(to_grid(PixelPosition::new(-1, -20), 20), GridPosition::new(-1, -1));
    assert_eq!(to_grid(PixelPosition::new(-21, 5), 20), GridPosition::new(-2, 0));
}

#[test]
fn to_grid_past_far_edge() {
    assert_eq!(to_grid(PixelPosition::new(400, 410), 20), GridPosition::new(20, 20));
}

// ── sentinel & equality ───────────────────────────────────────────────────────

#[test]
fn off_grid_is_only_the_sentinel() {
    assert!(is_off_grid(OFF_GRID));
    assert!(!is_off_grid(GridPosition::new(-1, 0)));
    assert!(!is_off_grid(GridPosition::new(0, -1)));
    assert!(!is_off_grid(GridPosition::new(0, 0)));
}

#[test]
fn equals_is_structural() {
    assert!(equals(GridPosition::new(3, 5), GridPosition::new(3, 5)));
    assert!(!equals(GridPosition::new(3, 5), GridPosition::new(5, 3)));
}

#[test]
fn in_bounds_is_half_open() {
    assert!(in_bounds(GridPosition::new(0, 0), 20));
    assert!(in_bounds(GridPosition::new(19, 19), 20));
    assert!(!in_bounds(GridPosition::new(20, 0), 20));
    assert!(!in_bounds(GridPosition::new(0, 20), 20));
    assert!(!in_bounds(OFF_GRID, 20));
}

#[test]
fn clamp_pulls_into_field() {
    assert_eq!(clamp(GridPosition::new(-3, 25), 20), GridPosition::new(0, 19));
    assert_eq!(clamp(GridPosition::new(7, 8), 20), GridPosition::new(7, 8));
}

// ── liveness ──────────────────────────────────────────────────────────────────

#[test]
fn liveness_follows_sentinel() {
    assert!(!Bullet::NONE.is_live());
    assert!(!Enemy::NONE.is_live());
    assert!(Bullet::at(GridPosition::new(0, 0)).is_live());
    assert!(Enemy::at(GridPosition::new(19, 0)).is_live());
}

#[test]
fn snapshot_mirrors_state() {
    let mut s = make_state();
    s.bullet = Bullet::at(GridPosition::new(10, 9));
    s.score = -200;
    let snap = Snapshot::from(&s);
    assert_eq!(snap.ship, GridPosition::new(10, 10));
    assert_eq!(snap.bullet, GridPosition::new(10, 9));
    assert_eq!(snap.enemy, OFF_GRID);
    assert_eq!(snap.score, -200);
    assert_eq!(snap.session, SessionState::Running);
}

#[test]
fn game_state_copy_is_independent() {
    let original = make_state();
    let mut copy = original;

    copy.ship.position = GridPosition::new(1, 1);
    copy.score = 999;
    copy.enemy = Enemy::at(GridPosition::new(5, 5));

    assert_eq!(original.ship.position, GridPosition::new(10, 10));
    assert_eq!(original.score, 0);
    assert!(!original.enemy.is_live());
}

#[test]
fn mode_and_policy_parse() {
    assert_eq!(SessionMode::parse("Hover"), Some(SessionMode::HoverToPlay));
    assert_eq!(SessionMode::parse("always-on"), Some(SessionMode::AlwaysOn));
    assert_eq!(SessionMode::parse("sometimes"), None);
    assert_eq!(SessionMode::HoverToPlay.initial_state(), SessionState::Paused);
    assert_eq!(SessionMode::AlwaysOn.initial_state(), SessionState::Running);

    assert_eq!(SpawnPolicy::parse("overwrite"), Some(SpawnPolicy::Overwrite));
    assert_eq!(SpawnPolicy::parse(" SUPPRESS "), Some(SpawnPolicy::Suppress));
    assert_eq!(SpawnPolicy::parse(""), None);
}
