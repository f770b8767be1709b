//! Pointer tracker: turns raw pointer pixels into the ship's grid cell.
//!
//! Pause gating lives in the session; the tracker only converts, clamps and
//! (optionally) throttles.

use std::time::Duration;

use crate::entities::{GridPosition, PixelPosition};
use crate::grid;

#[derive(Clone, Debug)]
pub struct PointerTracker {
    cell_size_px: u32,
    dimension: i32,
    clamp: bool,
    min_interval: Option<Duration>,
    last_applied: Option<Duration>,
    /// Latest sample dropped by the throttle, applied once the interval ends.
    pending: Option<PixelPosition>,
}

impl PointerTracker {
    pub fn new(cell_size_px: u32, dimension: i32, clamp: bool, sample_hz: Option<u32>) -> Self {
        Self {
            cell_size_px,
            dimension,
            clamp,
            min_interval: sample_hz
                .filter(|&hz| hz > 0)
                .map(|hz| Duration::from_secs(1) / hz),
            last_applied: None,
            pending: None,
        }
    }

    /// Cell for `pixel`, clamped into the field when clamping is on.
    pub fn locate(&self, pixel: PixelPosition) -> GridPosition {
        let pos = grid::to_grid(pixel, self.cell_size_px);
        if self.clamp {
            grid::clamp(pos, self.dimension)
        } else {
            pos
        }
    }

    /// Feed a pointer sample taken at `now`.
    ///
    /// Returns the new ship cell, or `None` when the throttle holds the
    /// sample back (it stays pending for `flush`).
    pub fn sample(&mut self, pixel: PixelPosition, now: Duration) -> Option<GridPosition> {
        if self.throttled(now) {
            self.pending = Some(pixel);
            return None;
        }
        self.pending = None;
        self.last_applied = Some(now);
        Some(self.locate(pixel))
    }

    /// Apply the pending sample if the throttle interval has elapsed.
    pub fn flush(&mut self, now: Duration) -> Option<GridPosition> {
        let pixel = self.pending?;
        if self.throttled(now) {
            return None;
        }
        self.pending = None;
        self.last_applied = Some(now);
        Some(self.locate(pixel))
    }

    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    fn throttled(&self, now: Duration) -> bool {
        match (self.min_interval, self.last_applied) {
            (Some(interval), Some(last)) => now.saturating_sub(last) < interval,
            _ => false,
        }
    }
}
