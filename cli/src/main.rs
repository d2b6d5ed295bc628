use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dpsmeter_cli::commands;
use dpsmeter_cli::settings_store::load_settings_or_default;
use dpsmeter_cli::trace::load_trace;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Replay and inspect DPS meter traces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a JSON-lines trace through a fresh meter
    Replay {
        #[arg(short, long)]
        trace: PathBuf,
        /// Settings file (defaults to the user config location)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the panel after every N ticks
        #[arg(short, long)]
        every: Option<usize>,
        /// Emit the final summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective settings
    Config {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Write a settings file with default values
    InitConfig {
        #[arg(short, long)]
        path: Option<PathBuf>,
        #[arg(short, long)]
        force: bool,
    },
}

/// Initialize logging, writing to DPSMETER_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("DPSMETER_LOG_PATH") {
        if let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
        {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(file)
                .init();
            return;
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), String> {
    init_logging();
    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Replay {
            trace,
            config,
            every,
            json,
        } => {
            let settings_path = commands::resolve_settings_path(config.as_deref())?;
            let settings = load_settings_or_default(&settings_path);
            let records = load_trace(&trace).map_err(|e| e.to_string())?;

            let summary = commands::replay(&records, &settings, every, &mut stdout)
                .map_err(|e| e.to_string())?;

            if json {
                let rendered = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
                writeln!(stdout, "{rendered}").map_err(|e| e.to_string())?;
            } else {
                commands::print_summary(&mut stdout, &summary, &settings.display)
                    .map_err(|e| e.to_string())?;
            }
        }
        Commands::Config { path } => {
            let path = commands::resolve_settings_path(path.as_deref())?;
            commands::show_settings(&path, &mut stdout)?;
        }
        Commands::InitConfig { path, force } => {
            let path = commands::resolve_settings_path(path.as_deref())?;
            commands::write_default_settings(&path, force)?;
            writeln!(stdout, "Wrote {}", path.display()).map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}
