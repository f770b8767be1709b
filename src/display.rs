//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of the
//! game.  No game logic is performed; this module only translates state into
//! terminal commands and maps terminal cells back to field pixels.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use grid_shooter::entities::{GameEvent, GridPosition, PixelPosition, SessionState, Snapshot};
use grid_shooter::grid;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_BORDER_PAUSED: Color = Color::DarkGrey;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_NEGATIVE: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_EVENT: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

/// Terminal columns per grid cell; rows map one to one.
const COLS_PER_CELL: u16 = 2;

// ── Layout ────────────────────────────────────────────────────────────────────

/// Where the play field sits on the terminal.
#[derive(Clone, Copy, Debug)]
pub struct Layout {
    /// Terminal column of grid cell (0, 0).
    pub origin_col: u16,
    /// Terminal row of grid cell (0, 0).
    pub origin_row: u16,
    pub dimension: i32,
    pub cell_size_px: u32,
}

impl Layout {
    /// Field just inside the border, below the HUD row.
    pub fn new(dimension: i32, cell_size_px: u32) -> Self {
        Self {
            origin_col: 1,
            origin_row: 2,
            dimension,
            cell_size_px,
        }
    }

    fn width_cols(&self) -> u16 {
        self.dimension as u16 * COLS_PER_CELL
    }

    /// True if the terminal cell lies over the play field.
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.origin_col
            && col < self.origin_col + self.width_cols()
            && row >= self.origin_row
            && row < self.origin_row + self.dimension as u16
    }

    /// Pointer pixels for a terminal cell, relative to the field's top-left.
    /// Cells outside the field give negative or oversized pixels.
    pub fn to_pixels(&self, col: u16, row: u16) -> PixelPosition {
        let cell = self.cell_size_px as i32;
        let dx = col as i32 - self.origin_col as i32;
        let dy = row as i32 - self.origin_row as i32;
        PixelPosition::new(
            (dx * cell).div_euclid(COLS_PER_CELL as i32),
            dy * cell,
        )
    }

    fn screen(&self, pos: GridPosition) -> Option<(u16, u16)> {
        if !grid::in_bounds(pos, self.dimension) {
            return None;
        }
        Some((
            self.origin_col + pos.x as u16 * COLS_PER_CELL,
            self.origin_row + pos.y as u16,
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    layout: &Layout,
    snapshot: &Snapshot,
    last_event: Option<&GameEvent>,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, layout, snapshot)?;
    draw_hud(out, layout, snapshot, last_event)?;

    draw_sprite(out, layout, snapshot.enemy, "▼▼", C_ENEMY)?;
    draw_sprite(out, layout, snapshot.bullet, "||", C_BULLET)?;
    draw_sprite(out, layout, snapshot.ship, "/\\", C_SHIP)?;

    draw_controls_hint(out, layout)?;

    if snapshot.session == SessionState::Paused {
        draw_paused(out, layout)?;
    }

    // Park cursor below the field and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, layout.origin_row + layout.dimension as u16 + 2))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, layout: &Layout, snapshot: &Snapshot) -> std::io::Result<()> {
    let w = layout.width_cols() as usize;
    let top = layout.origin_row - 1;
    let bottom = layout.origin_row + layout.dimension as u16;
    let right = layout.origin_col + layout.width_cols();

    let color = match snapshot.session {
        SessionState::Running => C_BORDER,
        SessionState::Paused => C_BORDER_PAUSED,
    };
    out.queue(style::SetForegroundColor(color))?;

    out.queue(cursor::MoveTo(layout.origin_col - 1, top))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;

    out.queue(cursor::MoveTo(layout.origin_col - 1, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;

    for row in layout.origin_row..bottom {
        out.queue(cursor::MoveTo(layout.origin_col - 1, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(right, row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(
    out: &mut W,
    layout: &Layout,
    snapshot: &Snapshot,
    last_event: Option<&GameEvent>,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(layout.origin_col, 0))?;
    let color = if snapshot.score < 0 {
        C_HUD_NEGATIVE
    } else {
        C_HUD_SCORE
    };
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(format!("Score:{:>7}", snapshot.score)))?;

    if let Some(event) = last_event.and_then(describe) {
        out.queue(style::SetForegroundColor(C_EVENT))?;
        out.queue(Print(format!("  {}", event)))?;
    }

    Ok(())
}

fn describe(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::EnemyDestroyed { reward, .. } => Some(format!("HIT +{}", reward)),
        GameEvent::ShipHit { penalty, .. } => Some(format!("RAMMED -{}", penalty)),
        GameEvent::EnemyEscaped { penalty } => Some(format!("MISSED -{}", penalty)),
        _ => None,
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_sprite<W: Write>(
    out: &mut W,
    layout: &Layout,
    pos: GridPosition,
    sprite: &str,
    color: Color,
) -> std::io::Result<()> {
    // Off-grid entities are simply not drawn
    if let Some((col, row)) = layout.screen(pos) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(sprite))?;
    }
    Ok(())
}

// ── Controls hint (below the field) ───────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(layout.origin_col, layout.origin_row + layout.dimension as u16 + 1))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("Mouse : Move   Click / SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Pause overlay ─────────────────────────────────────────────────────────────

fn draw_paused<W: Write>(out: &mut W, layout: &Layout) -> std::io::Result<()> {
    let lines = ["PAUSED", "hover the field to play"];
    let cx = layout.origin_col + layout.width_cols() / 2;
    let start_row = layout.origin_row + (layout.dimension as u16 / 2).saturating_sub(1);

    out.queue(style::SetForegroundColor(Color::White))?;
    for (i, msg) in lines.iter().enumerate() {
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}
