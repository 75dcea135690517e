//! Terminal 2048 runner (default binary).
//!
//! Blocks on one key at a time: render, read, map to a command, apply.
//! Uses crossterm for input and the framebuffer renderer for output.

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_2048::config::{Cli, GameConfig, DEFAULT_LOG_FILTER};
use tui_2048::core::{rng, BoardSnapshot, CommandOutcome, Session};
use tui_2048::input::{map_answer, map_key, should_quit};
use tui_2048::term::{write_text, FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};
use tui_2048::types::{Command, GameOverChoice};

const RETURN_PROMPT: &str = "Return? (y/n)";
const RESTART_PROMPT: &str = "Restart? (y/n)";

/// Question pending after the board got stuck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prompt {
    Return,
    Restart,
}

impl Prompt {
    fn text(self) -> &'static str {
        match self {
            Prompt::Return => RETURN_PROMPT,
            Prompt::Restart => RESTART_PROMPT,
        }
    }
}

fn main() -> Result<()> {
    let config = GameConfig::load(Cli::parse());
    init_logging(&config)?;
    let seed_warning = config.seed_warning();
    if let Some(message) = &seed_warning {
        warn!("{message}");
    }

    let mut session = Session::new(rng::from_seed_or_entropy(config.seed))
        .with_save_path(config.save_path.clone());
    session.start();

    if config.dump {
        if let Some(message) = &seed_warning {
            eprintln!("{message}");
        }
        write_text(&mut io::stdout().lock(), session.board())?;
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, seed_warning);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(moves = session.moves(), "exiting");
    result
}

/// Log to a file only; the terminal itself is owned by the game.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut Session, initial_status: Option<String>) -> Result<()> {
    let full = GameView::default();
    let compact = GameView::compact();

    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut status = initial_status;
    let mut prompt: Option<Prompt> = None;
    let mut show_help = false;

    while !session.is_exited() {
        if session.is_game_over() && prompt.is_none() {
            prompt = Some(Prompt::Return);
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let view = if h > full.frame_size().1 { &full } else { &compact };
        session.snapshot_into(&mut snap);
        let hud = HudView {
            status: status.as_deref(),
            prompt: prompt.map(Prompt::text),
            show_help,
        };
        view.render_into(&snap, &hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(..) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        if let Some(pending) = prompt {
            prompt = answer_prompt(session, pending, key);
            continue;
        }

        show_help = false;
        status = None;
        if should_quit(key) {
            session.apply_command(Command::Quit);
            break;
        }
        let Some(command) = map_key(key) else {
            status = Some("Invalid command, press h for help".to_string());
            continue;
        };

        match session.apply_command(command) {
            CommandOutcome::Help => show_help = true,
            CommandOutcome::Saved => {
                status = Some(format!("Saved to {}", session.save_path().display()));
            }
            CommandOutcome::Loaded(cells) => {
                status = Some(format!(
                    "Loaded {} cells from {}",
                    cells,
                    session.save_path().display()
                ));
            }
            CommandOutcome::Failed(e) => {
                warn!(error = %e, "command failed");
                status = Some(format!("Error: {e}"));
            }
            CommandOutcome::Unchanged if command == Command::Undo => {
                status = Some("Nothing to undo".to_string());
            }
            CommandOutcome::Changed
            | CommandOutcome::Unchanged
            | CommandOutcome::Quit
            | CommandOutcome::Ignored => {}
        }
    }

    Ok(())
}

/// Resolve one step of the game-over dialogue. Returns the next prompt, if any.
fn answer_prompt(session: &mut Session, pending: Prompt, key: KeyEvent) -> Option<Prompt> {
    if should_quit(key) {
        session.resolve_game_over(GameOverChoice::Exit);
        return None;
    }
    match (pending, map_answer(key)) {
        (Prompt::Return, Some(true)) => {
            session.resolve_game_over(GameOverChoice::Return);
            None
        }
        (Prompt::Return, Some(false)) => Some(Prompt::Restart),
        (Prompt::Restart, Some(true)) => {
            session.resolve_game_over(GameOverChoice::Restart);
            None
        }
        (Prompt::Restart, Some(false)) => {
            session.resolve_game_over(GameOverChoice::Exit);
            None
        }
        (_, None) => Some(pending),
    }
}
