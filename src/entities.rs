//! All game entity types — pure data, no logic beyond liveness.

// ── Coordinates ───────────────────────────────────────────────────────────────

/// A cell on the play field.  `(0, 0)` is the top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Sentinel for entities that are not on the grid.
pub const OFF_GRID: GridPosition = GridPosition::new(-1, -1);

/// Raw pointer coordinates in pixels, relative to the play field's top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelPosition {
    pub x: i32,
    pub y: i32,
}

impl PixelPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    /// Starts paused; the pointer entering the field resumes play and leaving
    /// it pauses again.
    HoverToPlay,
    /// Always running, engagement signals are ignored.
    AlwaysOn,
}

impl SessionMode {
    pub fn initial_state(&self) -> SessionState {
        match self {
            SessionMode::HoverToPlay => SessionState::Paused,
            SessionMode::AlwaysOn => SessionState::Running,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hover" | "hover-to-play" | "hover_to_play" => Some(SessionMode::HoverToPlay),
            "always" | "always-on" | "always_on" => Some(SessionMode::AlwaysOn),
            _ => None,
        }
    }
}

/// What an enemy spawn tick does while the previous enemy is still live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnPolicy {
    /// Replace the live enemy.  The replaced enemy carries no penalty.
    Overwrite,
    /// Skip the spawn until the live enemy resolves.
    Suppress,
}

impl SpawnPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "overwrite" | "replace" => Some(SpawnPolicy::Overwrite),
            "suppress" | "skip" => Some(SpawnPolicy::Suppress),
            _ => None,
        }
    }
}

// ── Ship, bullet & enemy ──────────────────────────────────────────────────────

/// The player's ship.  Never destroyed, only repositioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ship {
    pub position: GridPosition,
}

/// The single player projectile.  Live iff its position is not `OFF_GRID`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bullet {
    pub position: GridPosition,
}

impl Bullet {
    pub const NONE: Bullet = Bullet { position: OFF_GRID };

    pub fn at(position: GridPosition) -> Self {
        Self { position }
    }

    pub fn is_live(&self) -> bool {
        self.position != OFF_GRID
    }
}

/// The single descending enemy.  Live iff its position is not `OFF_GRID`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub position: GridPosition,
}

impl Enemy {
    pub const NONE: Enemy = Enemy { position: OFF_GRID };

    pub fn at(position: GridPosition) -> Self {
        Self { position }
    }

    pub fn is_live(&self) -> bool {
        self.position != OFF_GRID
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

/// Observable outcomes of a state change.  Consumers only read these; they
/// never feed back into the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Fired { at: GridPosition },
    /// The bullet left the top row without hitting anything.
    BulletExpired,
    EnemySpawned { at: GridPosition },
    /// A spawn tick replaced an enemy that was still live.
    EnemyReplaced { previous: GridPosition, at: GridPosition },
    SpawnSuppressed,
    /// The enemy reached the bottom of the field.
    EnemyEscaped { penalty: i64 },
    ShipHit { at: GridPosition, penalty: i64 },
    EnemyDestroyed { at: GridPosition, reward: i64 },
    Paused,
    Resumed,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire simulation state.  `Copy`, so pure update functions can return
/// a new value without touching the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub ship: Ship,
    pub bullet: Bullet,
    pub enemy: Enemy,
    pub score: i64,
    pub session: SessionState,
    /// Play-field size in cells along both axes.
    pub dimension: i32,
}

impl GameState {
    pub fn is_running(&self) -> bool {
        self.session == SessionState::Running
    }
}

/// Read-only view handed to the rendering boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub ship: GridPosition,
    /// `OFF_GRID` when no bullet is live.
    pub bullet: GridPosition,
    /// `OFF_GRID` when no enemy is live.
    pub enemy: GridPosition,
    pub score: i64,
    pub session: SessionState,
    pub dimension: i32,
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Snapshot {
            ship: state.ship.position,
            bullet: state.bullet.position,
            enemy: state.enemy.position,
            score: state.score,
            session: state.session,
            dimension: state.dimension,
        }
    }
}
