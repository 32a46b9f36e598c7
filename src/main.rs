#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use emu_settings_snapshot::config::{SettingsFile, SettingsStore};
use emu_settings_snapshot::constants::{logging, scope};
use emu_settings_snapshot::snapshot;

#[derive(Parser)]
#[command(name = "emu-settings-snapshot")]
#[command(about = "Print the effective emulation settings of a profile as plain text")]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Profile to resolve
    #[arg(long, short = 'p', default_value = scope::GLOBAL)]
    profile: String,

    /// Write the snapshot to this file instead of stdout
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Title printed above the snapshot (not part of the exported text)
    #[arg(long)]
    title: Option<String>,

    /// List known profiles and exit
    #[arg(long)]
    list_profiles: bool,
}

fn init_logging() -> Result<()> {
    let log_level = match std::env::var(logging::LEVEL_ENV)
        .unwrap_or_else(|_| logging::DEFAULT_LEVEL.to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    // stdout carries the snapshot
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")
}

fn list_profiles(store: &SettingsStore) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", scope::GLOBAL)?;
    for profile in store.profiles() {
        let mode = if profile.use_custom_settings { "custom" } else { "global" };
        writeln!(stdout, "{} ({})", profile.name, mode)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config_path = cli.config.unwrap_or_else(SettingsFile::path);
    let store = SettingsFile::load(&config_path)?;

    if cli.list_profiles {
        return list_profiles(&store);
    }

    let effective = store.resolve_effective(&cli.profile);
    info!(profile = %cli.profile, source = %effective.name, "Resolved effective settings");

    let text = snapshot::format(&effective);

    if let Some(title) = &cli.title {
        println!("{title}\n");
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, &text)
                .with_context(|| format!("Failed to write snapshot to {:?}", path))?;
            info!(path = %path.display(), "Wrote settings snapshot");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}").context("Failed to write snapshot to stdout")?;
        }
    }

    Ok(())
}
