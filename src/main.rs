use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use whatsafe::config::{Config, OutputFormat};
use whatsafe::pipeline::analysis::{analyze_path_with, analyze_with, IN_MEMORY_SOURCE};
use whatsafe::transcript::parser::parse_text;

/// Whatsafe: heuristic boycott-risk detection for group chats.
///
/// Reads a WhatsApp-style text export and reports how strongly the
/// conversation shows signs of coordinated exclusion.
#[derive(Parser)]
#[command(name = "whatsafe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a chat export for boycott risk
    Analyze {
        /// Path to the export (.txt). Reads stdin when omitted or "-"
        path: Option<PathBuf>,

        /// Print the result as JSON instead of a report
        #[arg(long)]
        json: bool,
    },

    /// List the phrases that flag a message
    Vocabulary,

    /// Print parsed messages as JSON lines (for checking new export formats)
    Parse {
        /// Path to the export (.txt). Reads stdin when omitted or "-"
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("whatsafe=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { path, json } => {
            let analyzer = config.analyzer()?;

            let result = match file_arg(path.as_deref()) {
                Some(path) => analyze_path_with(path, &analyzer)?,
                None => analyze_with(&read_stdin()?, IN_MEMORY_SOURCE, &analyzer),
            };

            if json || config.output_format == OutputFormat::Json {
                println!("{}", whatsafe::output::to_json(&result)?);
            } else {
                whatsafe::output::terminal::display_analysis(&result);
            }
        }

        Commands::Vocabulary => {
            let vocabulary = config.vocabulary()?;
            let origin = match &config.vocabulary_path {
                Some(path) => path.display().to_string(),
                None => "built-in".to_string(),
            };
            whatsafe::output::terminal::display_vocabulary(&vocabulary, &origin);
        }

        Commands::Parse { path } => {
            let content = match file_arg(path.as_deref()) {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read chat export {}", path.display()))?,
                None => read_stdin()?,
            };

            let messages = parse_text(&content);
            info!(count = messages.len(), "Parsed messages");
            for message in &messages {
                println!("{}", serde_json::to_string(message)?);
            }
        }
    }

    Ok(())
}

/// A path argument, or None when the input should come from stdin.
fn file_arg(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != "-")
}

fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read chat export from stdin")?;
    Ok(content)
}
