//! Grid shooter simulation engine.
//!
//! The ship follows the pointer on a fixed grid, fires one bullet at a time
//! and must intercept enemies that spawn periodically at the top row.
//! Everything here is rendering-agnostic; `display` and the binary are the
//! only places that touch the terminal.

pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod grid;
pub mod pointer;
pub mod scheduler;
pub mod session;

pub use config::GameConfig;
pub use entities::{GameEvent, GridPosition, PixelPosition, SessionState, Snapshot};
pub use error::ConfigError;
pub use session::Session;
