//! WordGrid CLI - Command-line interface for the WordGrid puzzle app.
//!
//! Generates word-search puzzles from themed packs, the generative word
//! service, or explicit word lists; verifies saved puzzles; and summarizes
//! play statistics. Useful for headless play, scripting, and debugging.

mod commands;

use clap::{Parser, Subcommand};
use tracing::info;

use wg_core::config::{AppConfig, ConfigHandle};
use wg_core::error::WgResult;
use wg_core::logging;
use wg_core::platform::Platform;

/// WordGrid - word-search puzzle generator.
#[derive(Parser)]
#[command(
    name = "wordgrid",
    version,
    about = "WordGrid word-search puzzle CLI",
    long_about = "A command-line interface for the WordGrid puzzle app.\n\
                   Generate word-search grids from themed packs or your own words,\n\
                   verify saved puzzles, and track play statistics."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a word-search puzzle.
    Generate {
        /// Words to hide in the grid. Omit to use a themed pack.
        words: Vec<String>,
        /// Theme to source words from (builtin pack or word service).
        #[arg(short, long)]
        theme: Option<String>,
        /// Number of words to request when using a theme.
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Grid dimension override (clamped to 8-16).
        #[arg(short, long)]
        size: Option<usize>,
        /// Random seed for reproducible grids.
        #[arg(long)]
        seed: Option<u64>,
        /// Print the solution (word placements) below the grid.
        #[arg(long)]
        solution: bool,
        /// Save the puzzle as JSON to this file.
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Verify that a saved puzzle contains all of its words.
    Verify {
        /// Path to a puzzle JSON file produced by `generate --output`.
        file: String,
    },
    /// List and inspect built-in word packs.
    Packs {
        #[command(subcommand)]
        action: commands::packs::PacksAction,
    },
    /// Fetch a themed word list without generating a puzzle.
    Words {
        /// Theme to fetch words for. Defaults to the configured theme.
        theme: Option<String>,
        /// Number of words to fetch.
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// List the themes the word service offers instead of fetching words.
        #[arg(long)]
        list_themes: bool,
    },
    /// Show word service connection status.
    Status,
    /// Summarize play sessions from a JSON file.
    Stats {
        /// Path to a JSON file containing an array of play sessions.
        file: String,
    },
    /// View and modify settings.
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
}

#[tokio::main]
async fn main() -> WgResult<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let log_dir = Platform::data_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("logs");
    let _guard = logging::init_logging(log_level, &log_dir, false)?;

    // Load configuration
    let config = if let Some(path) = cli.config.as_deref() {
        AppConfig::load_from_file(std::path::Path::new(path))?
    } else {
        AppConfig::load_default()?
    };

    let config_handle = ConfigHandle::new(config);

    info!("WordGrid CLI v{}", wg_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Generate {
            words,
            theme,
            count,
            size,
            seed,
            solution,
            output,
        } => {
            commands::generate::run(
                config_handle,
                words,
                theme,
                count,
                size,
                seed,
                solution,
                output,
                cli.format,
            )
            .await
        }
        Commands::Verify { file } => {
            commands::verify::run(config_handle, file, cli.format).await
        }
        Commands::Packs { action } => {
            commands::packs::run(config_handle, action, cli.format).await
        }
        Commands::Words {
            theme,
            count,
            list_themes,
        } => commands::words::run(config_handle, theme, count, list_themes, cli.format).await,
        Commands::Status => commands::status::run(config_handle, cli.format).await,
        Commands::Stats { file } => {
            commands::stats::run(config_handle, file, cli.format).await
        }
        Commands::Settings { action } => {
            commands::settings::run(config_handle, action, cli.format).await
        }
    }
}
