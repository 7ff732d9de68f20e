mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use swarm_shooter::audio::TerminalBell;
use swarm_shooter::config::GameConfig;
use swarm_shooter::constants::FRAME_MS;
use swarm_shooter::error::ConfigError;
use swarm_shooter::events::SwarmEvent;
use swarm_shooter::input::{InputState, KeyTracker};
use swarm_shooter::swarm::Swarm;

const FRAME: Duration = Duration::from_millis(FRAME_MS);

/// Config picked up from the working directory when `--config` is not given.
const DEFAULT_CONFIG: &str = "swarm.toml";

#[derive(Parser, Debug)]
#[command(name = "swarm_shooter", about = "Steer a descending enemy swarm in the terminal")]
struct Args {
    /// TOML file overriding any subset of the arena and swarm tunables.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the fire-control RNG; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Where log output goes while the terminal is in raw mode.
    #[arg(long, default_value = "swarm_shooter.log")]
    log_file: PathBuf,
}

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<GameConfig> {
    let config = match explicit {
        Some(path) => GameConfig::load(path)?,
        None => match GameConfig::load(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(ConfigError::Io { .. }) => {
                tracing::info!("no {DEFAULT_CONFIG} found; using compiled defaults");
                GameConfig::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring {DEFAULT_CONFIG}; using compiled defaults");
                GameConfig::default()
            }
        },
    };
    config.validate()?;
    Ok(config)
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drives one swarm across as many rounds as the user asks for.
/// Returns when the user quits.
fn game_loop<W: Write>(
    out: &mut W,
    swarm: &mut Swarm,
    outcomes: &mpsc::Receiver<SwarmEvent>,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<()> {
    let mut keys = KeyTracker::new();
    let mut round_started = Instant::now();
    let mut round_time: Option<Duration> = None;
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        keys.next_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code, kind, modifiers, ..
            }) = ev
            else {
                continue;
            };
            keys.record(code, kind);
            if kind != KeyEventKind::Press {
                continue;
            }
            match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(()),
                KeyCode::Char('r') | KeyCode::Char('R') if round_time.is_some() => {
                    swarm.new_round();
                    keys.clear();
                    round_started = Instant::now();
                    round_time = None;
                }
                _ => {}
            }
        }

        // ── Simulate ──────────────────────────────────────────────────────────
        let dt = frame_start.duration_since(last_frame);
        last_frame = frame_start;
        if round_time.is_none() {
            swarm.advance_clock(dt);
            swarm.update(InputState::poll(&keys));
        }

        // ── React to outcomes ─────────────────────────────────────────────────
        while let Ok(outcome) = outcomes.try_recv() {
            match outcome {
                SwarmEvent::Depleted | SwarmEvent::UnitReachedFloor { .. } => {
                    round_time.get_or_insert_with(|| round_started.elapsed());
                }
                SwarmEvent::UnitFired { .. } | SwarmEvent::UnitDestroyed { .. } => {}
            }
        }

        let elapsed = round_time.unwrap_or_else(|| round_started.elapsed());
        let (width, height) = terminal::size()?;
        display::render(out, swarm, elapsed, width, height)?;

        let spent = frame_start.elapsed();
        if spent < FRAME {
            thread::sleep(FRAME - spent);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_file)?;

    let config = load_config(args.config.as_deref())?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut swarm = Swarm::new(&config, rng, Box::new(TerminalBell))?;

    let (outcome_tx, outcome_rx) = mpsc::channel::<SwarmEvent>();
    swarm.subscribe(move |event| {
        let _ = outcome_tx.send(event.clone());
    });

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to hold windows.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(&mut out, &mut swarm, &outcome_rx, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
