mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use log::{error, info, warn};

use grid_shooter::entities::GameEvent;
use grid_shooter::{GameConfig, Session};

use crate::display::Layout;

/// Redraw clock, independent of the movement timers.
const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode while playing, so records never go to the
/// screen: they land in the configured log file or are discarded.
fn log_target(config: &GameConfig) -> anyhow::Result<env_logger::Target> {
    match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot open log file {}", path.display()))?;
            Ok(env_logger::Target::Pipe(Box::new(file)))
        }
        None => Ok(env_logger::Target::Pipe(Box::new(std::io::sink()))),
    }
}

/// Debug level when a log file is set, otherwise off unless `RUST_LOG` asks.
fn init_logging(config: &GameConfig) -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));
    if config.log_file.is_some() {
        builder.filter_level(log::LevelFilter::Debug).parse_default_env();
    }
    builder
        .target(log_target(config)?)
        .try_init()
        .context("logger already initialised")?;
    Ok(())
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Feed one terminal event into the session.
fn handle_input<R: rand::Rng>(session: &mut Session<R>, layout: &Layout, ev: Event) -> Flow {
    match ev {
        Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Flow::Quit,
            KeyCode::Char(' ') => session.fire(),
            _ => {}
        },
        Event::Mouse(MouseEvent { kind, column, row, .. }) => {
            let inside = layout.contains(column, row);
            session.set_engaged(inside);
            let pixel = layout.to_pixels(column, row);
            session.set_pointer(pixel.x, pixel.y);
            if kind == MouseEventKind::Down(MouseButton::Left) && inside {
                session.fire();
            }
        }
        // Only reported once focus change is enabled on the terminal
        Event::FocusLost => session.set_engaged(false),
        _ => {}
    }
    Flow::Continue
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input model: pointer samples, enter/leave and clicks are fed straight into
/// the session as they arrive; the movement timers run on the session's own
/// clock, and the frame loop only redraws the latest snapshot.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    layout: &Layout,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let start = Instant::now();
    let mut last_event: Option<GameEvent> = None;

    loop {
        let frame_start = Instant::now();
        session.advance_to(start.elapsed());

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if handle_input(session, layout, ev) == Flow::Quit {
                return Ok(());
            }
        }

        for event in session.drain_events() {
            info!("{:?}", event);
            if matches!(
                event,
                GameEvent::EnemyDestroyed { .. }
                    | GameEvent::ShipHit { .. }
                    | GameEvent::EnemyEscaped { .. }
            ) {
                last_event = Some(event);
            }
        }

        display::render(out, layout, &session.snapshot(), last_event.as_ref())?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            std::thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = GameConfig::from_env().context("invalid configuration")?;
    init_logging(&config)?;

    let mut session = Session::new(&config)?;
    let layout = Layout::new(config.dimension(), config.cell_size_px);

    let (width, height) = terminal::size()?;
    let needed_cols = config.dimension() as u16 * 2 + 2;
    let needed_rows = config.dimension() as u16 + 4;
    if width < needed_cols || height < needed_rows {
        warn!(
            "terminal {}x{} is smaller than the {}x{} field",
            width, height, needed_cols, needed_rows
        );
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    out.execute(EnableFocusChange)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(e) => {
                error!("input thread stopped: {}", e);
                break;
            }
        }
    });

    let result = game_loop(&mut out, &mut session, &layout, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(DisableFocusChange);
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("session ended with score {}", session.score());
    println!("Final score: {}", session.score());
    result.context("game loop failed")
}
