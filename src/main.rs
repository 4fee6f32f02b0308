//! Gap Glider entry point
//!
//! Loads level data, waits for the first key press, then runs the event loop:
//! every event goes through the session and the resulting snapshot is drawn.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use gap_glider::platform::{self, EventSource, HostEvent};
use gap_glider::renderer::{GameView, TerminalRenderer, Viewport};
use gap_glider::{Level, Session, Tuning, level};

#[derive(Debug, Parser)]
#[command(name = "gap-glider", about = "Flap through the gaps")]
struct Args {
    /// Obstacle CSV (gap_center, gap_size, spawn_time_seconds)
    #[arg(long, default_value = "assets/levels/classic.csv")]
    level: PathBuf,

    /// JSON file overriding physics tuning
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Seed for crash bounces (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    // No level, no game
    let specs = level::load_file(&args.level, &tuning)
        .with_context(|| format!("loading level from {}", args.level.display()))?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Gap Glider starting with seed {seed}");
    let level = Level::new(specs, tuning, seed).context("building level")?;
    let session = Session::new(level);

    let mut term = TerminalRenderer::new();
    term.enter().context("entering terminal")?;
    let result = run(&mut term, session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut session: Session) -> Result<()> {
    let view = GameView;

    let (w, h) = TerminalRenderer::size();
    term.draw(view.render_title(Viewport::new(w, h)))?;
    if !platform::wait_for_start()? {
        return Ok(());
    }

    let tick = Duration::from_millis(session.level().tuning().tick_ms);
    let events = EventSource::start(tick);

    let (w, h) = TerminalRenderer::size();
    term.draw(view.render(session.state(), session.level().tuning(), Viewport::new(w, h)))?;

    while let Some(event) = events.recv() {
        let HostEvent::Game(event) = event else {
            break;
        };
        session.apply(event);

        let (w, h) = TerminalRenderer::size();
        let fb = view.render(session.state(), session.level().tuning(), Viewport::new(w, h));
        term.draw(fb)?;
    }

    log::info!("Quit with score {}", session.state().score);
    Ok(())
}
