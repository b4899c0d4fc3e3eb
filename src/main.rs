use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ordo::cli::commands::analyze::Format;

#[derive(Parser)]
#[command(name = "ordo")]
#[command(
    version,
    about = "Static Big-O time/space complexity estimator for code snippets"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the complexity of a snippet from a file or stdin
    Analyze {
        #[arg(help = "Source file to analyze ('-' or omitted reads stdin)")]
        file: Option<PathBuf>,
        #[arg(
            long,
            short,
            help = "Language tag: python, c, cpp, c++ (inferred from file extension when omitted)"
        )]
        language: Option<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            value_parser = Format::parse,
            help = "Output format: text, json"
        )]
        format: Format,
        #[arg(
            long,
            help = "Read a full {\"code\", \"language\"} JSON request from stdin"
        )]
        json_request: bool,
    },

    /// List supported languages and their analyzers
    Languages,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Analyze {
            file,
            language,
            format,
            json_request,
        } => {
            ordo::cli::commands::analyze::run(file, language, format, json_request)?;
        }
        Commands::Languages => {
            ordo::cli::commands::languages::run()?;
        }
    }

    Ok(())
}
