//! Fixed configuration constants and the optional environment overlay.

use std::path::PathBuf;
use std::time::Duration;

use crate::entities::{SessionMode, SpawnPolicy};
use crate::error::ConfigError;

// ── Reference constants ───────────────────────────────────────────────────────

pub const FIELD_SIZE_PX: u32 = 400;
pub const CELL_SIZE_PX: u32 = 20;
pub const MOVEMENT_TICK: Duration = Duration::from_millis(100);
pub const SPAWN_PERIOD: Duration = Duration::from_millis(2200);
/// Upper bound for the optional pointer throttle.
pub const POINTER_SAMPLE_HZ: u32 = 100;

const ENV_MODE: &str = "GRID_SHOOTER_MODE";
const ENV_SPAWN_POLICY: &str = "GRID_SHOOTER_SPAWN_POLICY";
const ENV_CLAMP: &str = "GRID_SHOOTER_CLAMP";
const ENV_POINTER_HZ: &str = "GRID_SHOOTER_POINTER_HZ";
const ENV_SEED: &str = "GRID_SHOOTER_SEED";
const ENV_LOG_FILE: &str = "GRID_SHOOTER_LOG_FILE";

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub field_size_px: u32,
    pub cell_size_px: u32,
    pub bullet_period: Duration,
    pub enemy_period: Duration,
    pub spawn_period: Duration,
    pub mode: SessionMode,
    pub spawn_policy: SpawnPolicy,
    /// Clamp pointer-derived ship cells into the field.
    pub clamp_pointer: bool,
    /// Throttle pointer updates to at most this many per second.
    pub pointer_sample_hz: Option<u32>,
    /// Seed for enemy placement; entropy when absent.
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_size_px: FIELD_SIZE_PX,
            cell_size_px: CELL_SIZE_PX,
            bullet_period: MOVEMENT_TICK,
            enemy_period: MOVEMENT_TICK,
            spawn_period: SPAWN_PERIOD,
            mode: SessionMode::HoverToPlay,
            spawn_policy: SpawnPolicy::Overwrite,
            clamp_pointer: true,
            pointer_sample_hz: None,
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Play-field size in cells.
    pub fn dimension(&self) -> i32 {
        (self.field_size_px / self.cell_size_px.max(1)) as i32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size_px == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.field_size_px < self.cell_size_px || self.field_size_px % self.cell_size_px != 0 {
            return Err(ConfigError::FieldNotDivisible {
                field_px: self.field_size_px,
                cell_px: self.cell_size_px,
            });
        }
        for (name, period) in [
            ("bullet", self.bullet_period),
            ("enemy", self.enemy_period),
            ("spawn", self.spawn_period),
        ] {
            if period.is_zero() {
                return Err(ConfigError::ZeroPeriod(name));
            }
        }
        if self.pointer_sample_hz == Some(0) {
            return Err(ConfigError::ZeroSampleRate);
        }
        Ok(())
    }

    /// Defaults overlaid with `GRID_SHOOTER_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup(ENV_MODE) {
            config.mode = SessionMode::parse(&v).ok_or_else(|| invalid(ENV_MODE, &v))?;
        }
        if let Some(v) = lookup(ENV_SPAWN_POLICY) {
            config.spawn_policy =
                SpawnPolicy::parse(&v).ok_or_else(|| invalid(ENV_SPAWN_POLICY, &v))?;
        }
        if let Some(v) = lookup(ENV_CLAMP) {
            config.clamp_pointer = parse_bool(&v).ok_or_else(|| invalid(ENV_CLAMP, &v))?;
        }
        if let Some(v) = lookup(ENV_POINTER_HZ) {
            let hz: u32 = v.trim().parse().map_err(|_| invalid(ENV_POINTER_HZ, &v))?;
            config.pointer_sample_hz = Some(hz.min(POINTER_SAMPLE_HZ));
        }
        if let Some(v) = lookup(ENV_SEED) {
            config.seed = Some(v.trim().parse().map_err(|_| invalid(ENV_SEED, &v))?);
        }
        if let Some(v) = lookup(ENV_LOG_FILE) {
            if !v.trim().is_empty() {
                config.log_file = Some(PathBuf::from(v.trim()));
            }
        }

        config.validate()?;
        Ok(config)
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
