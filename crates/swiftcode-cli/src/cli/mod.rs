//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use swiftcode_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "swiftcode")]
#[command(version)]
#[command(about = "Typewriter-style syntax-highlighted code snippets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Play snippets in the terminal, one character at a time
    Play {
        /// Source files to play (`-` reads stdin). Plays the demo when empty.
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Delay between characters in milliseconds (overrides config)
        #[arg(long, env = "SWIFTCODE_DELAY_MS", value_name = "MS")]
        delay_ms: Option<u64>,

        /// Language label shown in the title (display only)
        #[arg(short, long)]
        language: Option<String>,

        /// Hide the caret
        #[arg(long = "no-caret")]
        no_caret: bool,
    },

    /// Print the highlighted runs of a snippet
    Tokens {
        /// Source file (`-` reads stdin). Uses the demo when omitted.
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Only tokenize the first N characters (clamped to the text length)
        #[arg(long, value_name = "N")]
        reveal: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = commands::tokens::Format::Text)]
        format: commands::tokens::Format,

        /// Carry unterminated strings across lines
        #[arg(long)]
        carry_line_state: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print a fresh config generated from the built-in defaults
    Generate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli) })
}

fn dispatch(cli: Cli) -> Result<()> {
    // default to playing the demo
    let command = cli.command.unwrap_or(Commands::Play {
        files: Vec::new(),
        delay_ms: None,
        language: None,
        no_caret: false,
    });

    match command {
        Commands::Play {
            files,
            delay_ms,
            language,
            no_caret,
        } => {
            let mut config = config::Config::load().context("load config")?;
            let _log = init_logging(&config);
            if let Some(ms) = delay_ms {
                config.delay_ms = ms;
            }
            if no_caret {
                config.show_caret = false;
            }
            commands::play::run(&config, &files, language.as_deref())
        }

        Commands::Tokens {
            file,
            reveal,
            format,
            carry_line_state,
        } => {
            let mut config = config::Config::load().context("load config")?;
            let _log = init_logging(&config);
            if carry_line_state {
                config.carry_line_state = true;
            }
            commands::tokens::run(&config, file.as_deref(), reveal, format)
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Generate => commands::config::generate(),
        },
    }
}

/// Starts file logging. Failure only disables logging.
fn init_logging(config: &config::Config) -> Option<logging::LogGuard> {
    match logging::init(&config.log) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
    }
}
