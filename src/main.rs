//! Terminal fireworks runner (default binary).
//!
//! Drives `App` at a fixed 60 Hz tick using crossterm for input and the
//! framebuffer diff renderer for output. Any key launches a new burst;
//! `q` or Ctrl+C quits.

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_fireworks::input::map_event;
use tui_fireworks::term::{FrameBuffer, TerminalRenderer};
use tui_fireworks::types::{Control, TICK_SECONDS};
use tui_fireworks::App;

#[derive(Parser, Debug)]
#[command(name = "tui-fireworks", version, about = "Fireworks in your terminal")]
struct Cli {
    /// Seed for the random source (bursts are reproducible with the same seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Run this many ticks without entering the terminal, then print the frame
    #[arg(long, value_name = "N")]
    frames: Option<u32>,

    /// Frame width in cells (defaults to the terminal width)
    #[arg(long)]
    width: Option<u16>,

    /// Frame height in cells (defaults to the terminal height)
    #[arg(long)]
    height: Option<u16>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let (width, height) = frame_size(&cli)?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut app = App::new(width, height, rng);

    if let Some(frames) = cli.frames {
        for _ in 0..frames {
            app.on_tick();
        }
        println!("{}", app.render());
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;
    info!("started in {}x{} terminal", width, height);

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!("stopped");
    result
}

fn init_logging(path: Option<&std::path::Path>) -> Result<()> {
    // Logging to the tty would draw over the animation, so only log to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn frame_size(cli: &Cli) -> Result<(u16, u16)> {
    if let (Some(w), Some(h)) = (cli.width, cli.height) {
        return Ok((w, h));
    }
    let (w, h) = crossterm::terminal::size().context("failed to query terminal size")?;
    Ok((cli.width.unwrap_or(w), cli.height.unwrap_or(h)))
}

fn run(term: &mut TerminalRenderer, app: &mut App<StdRng>) -> Result<()> {
    let tick_duration = Duration::from_secs_f64(TICK_SECONDS);
    let mut last_tick = Instant::now();
    let mut fb = FrameBuffer::new(0, 0);

    app.render_into(&mut fb);
    term.draw_swap(&mut fb)?;

    loop {
        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Some(ev) = map_event(event::read()?) {
                if app.on_event(ev) == Control::Quit {
                    return Ok(());
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.on_tick();
            app.render_into(&mut fb);
            term.draw_swap(&mut fb)?;
        }
    }
}
