//! `earhw` binary: collect the snapshot, run the viewer, restore the terminal.

use clap::Parser;
use crossbeam_channel::unbounded;
use earhw::actor::{install_signal_handler, ExitReason, InputPump};
use earhw::config::{LogConfig, ProbeConfig, SurfaceConfig, Theme};
use earhw::error::{Error, Result};
use earhw::hardware::platform_source;
use earhw::terminal::{CrosstermSurface, Surface, TerminalGuard};
use earhw::App;
use std::fs::OpenOptions;
use std::process;
use std::sync::{Arc, Mutex};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Browse this machine's CPU details in a retro terminal UI.
#[derive(Debug, Parser)]
#[command(name = "earhw", version, about)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let code = match run() {
        Ok(ExitReason::Failed(message)) => {
            eprintln!("earhw: {message}");
            1
        }
        Ok(reason) => reason.exit_code(),
        Err(err) => {
            error!(%err, "startup failed");
            eprintln!("earhw: {err}");
            1
        }
    };
    process::exit(code);
}

/// Everything between startup and the first exit reason.
///
/// The terminal guard is dropped before this returns, so callers may write
/// to stderr.
fn run() -> Result<ExitReason> {
    init_logging(&LogConfig::from_env())?;

    let snapshot = platform_source(ProbeConfig::default()).collect()?;
    info!(
        vendor = %snapshot.cpu.vendor,
        features = snapshot.cpu.features.len(),
        caches = snapshot.cpu.caches.len(),
        "hardware collected"
    );

    let config = SurfaceConfig::default();
    let mut guard = TerminalGuard::enter(&config).map_err(Error::Screen)?;
    let mut surface = CrosstermSurface::stdout().map_err(Error::Terminal)?;
    if config.enable_mouse {
        surface.enable_mouse().map_err(Error::Terminal)?;
    }

    let (exits_tx, exits_rx) = unbounded();
    install_signal_handler(exits_tx.clone())?;

    let app = App::new(Arc::new(snapshot), surface, Theme::default());
    let _pump = InputPump::spawn(app, exits_tx);

    // The signal handler keeps a sender alive, so recv only fails if both
    // producers are gone.
    let reason = exits_rx.recv().unwrap_or(ExitReason::StreamClosed);
    info!(?reason, "shutting down");

    guard.restore();
    Ok(reason)
}

/// Install a file-backed subscriber when a log file is configured.
fn init_logging(config: &LogConfig) -> Result<()> {
    let Some(path) = &config.file else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| Error::Log(format!("{}: {err}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| Error::Log(err.to_string()))
}
