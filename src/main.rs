//! Terminal Tic-Tac-Toe runner (default binary).
//!
//! It uses crossterm for mouse/keyboard input and a framebuffer-based renderer.
//! Each tick consumes at most one pointer release, updates the game and
//! repaints the board from a snapshot.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use tui_tictactoe::core::{ClickOutcome, GameSnapshot, GameState};
use tui_tictactoe::input::{should_quit, PointerTracker};
use tui_tictactoe::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_tictactoe::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env();
    if let Some(path) = &config.log_path {
        if !logging::init(path)? {
            warn!(path = %path.display(), "tracing subscriber already installed, log file unused");
        }
    }
    info!(?config, "starting tic-tac-toe");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    info!("shutting down");
    result
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameState::new();
    let view = GameView::new(config.cell_width, config.cell_height);
    let mut pointer = PointerTracker::new();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        pointer.set_screen_map(view.screen_map(viewport));

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => pointer.handle_mouse(mouse),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if let Some(outcome) = game.update(&mut pointer) {
                log_outcome(outcome, &game);
            }

            game.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}

fn log_outcome(outcome: ClickOutcome, game: &GameState) {
    match outcome {
        ClickOutcome::Placed {
            row,
            col,
            player,
            status,
        } => {
            debug!(row, col, %player, %status, moves = game.move_count(), "move accepted");
            if status.is_terminal() {
                info!(%status, episode = game.episode_id(), "game decided");
            }
        }
        ClickOutcome::Occupied => debug!("click on occupied cell ignored"),
        ClickOutcome::OutOfBounds => debug!("click outside the board ignored"),
        ClickOutcome::Reset => info!(episode = game.episode_id(), "new game"),
    }
}
