//! Slovnyk - Main entrypoint.
//!
//! Loads configuration, sets up logging, reads the word file and then either
//! answers the queries given on the command line or starts the interactive shell.

use clap::{CommandFactory, Parser, Subcommand};
use slovnyk_lib::config::{ConfigLoader, LogConfig, SlovnykConfig, ENV_PREFIX};
use slovnyk_lib::data_structures::PrefixDictionary;
use slovnyk_lib::error::{report_error, ErrorContext, SlovnykError, SlovnykResult};
use slovnyk_lib::ingest;
use slovnyk_lib::shell::{OutputFormat, Shell};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Slovnyk.
#[derive(Parser, Debug)]
#[clap(name = "slovnyk", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser, global = true)]
    config: Option<PathBuf>,

    /// Print query results as JSON lines
    #[clap(long)]
    json: bool,

    /// Word file to load
    #[clap(value_parser)]
    file: Option<PathBuf>,

    /// Queries to answer; the interactive shell starts when none are given
    queries: Vec<String>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. `RUST_LOG` overrides the configured level.
fn init_logging(log: &LogConfig) -> SlovnykResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    result.map_err(|e| SlovnykError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Loads the word file and answers queries or runs the shell.
fn run_dictionary(
    file: Option<PathBuf>,
    queries: &[String],
    json: bool,
    config: &SlovnykConfig,
) -> SlovnykResult<()> {
    let Some(file) = file else {
        Args::command().print_help()?;
        process::exit(2);
    };

    let mut dictionary = PrefixDictionary::with_collation(config.dictionary.collation);
    match ingest::load_file(&file, &mut dictionary, &config.ingest) {
        Ok(report) if !json => {
            println!("\nDictionary downloaded");
            println!("We have {} words in the dictionary", dictionary.count_words());
            info!(?report, "ingestion report");
        }
        Ok(report) => info!(?report, "ingestion report"),
        // A missing or unreadable file leaves an empty dictionary to work with.
        Err(e) => report_error(
            ErrorContext::new(e.into(), "ingest").with_details(file.display().to_string()),
        ),
    }

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(dictionary, stdin.lock(), stdout.lock());
    if queries.is_empty() {
        shell.run()
    } else {
        shell.run_queries(queries, format)
    }
}

/// Main entry point for the application.
fn main() -> SlovnykResult<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    init_logging(&config.log)?;
    slovnyk_lib::init();
    info!(version = slovnyk_lib::VERSION, "starting slovnyk");

    match args.command {
        Some(Command::Validate) => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Some(Command::GenConfig { output }) => {
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&output, SlovnykConfig::default().to_toml()?)?;
            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        None => run_dictionary(args.file, &args.queries, args.json, &config),
    }
}
