//! judgebeer CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "judgebeer", version, about = "Beer tasting questionnaire")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Taste a beer step by step
    Taste {
        /// Skip the overlay between steps
        #[arg(long)]
        no_transition: bool,

        /// How long the overlay stays up, in milliseconds
        #[arg(long)]
        transition_ms: Option<u64>,

        /// Output format: text, json, html, query
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file (html defaults to the configured output directory)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Label language: zh, en
        #[arg(long)]
        lang: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Render a report from a query string
    Report {
        /// Query string, with or without the leading '?', or a full URL
        #[arg(long)]
        query: String,

        /// Output format: text, json, html
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Label language: zh, en
        #[arg(long)]
        lang: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Score a tasting sheet without the wizard
    Score {
        /// Path to a .toml tasting sheet
        #[arg(long)]
        sheet: PathBuf,

        /// Output format: text, json, html, query
        #[arg(long, default_value = "text")]
        format: String,

        /// Output file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Label language: zh, en
        #[arg(long)]
        lang: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate tasting sheet TOML files
    Validate {
        /// Path to a sheet file or directory
        #[arg(long)]
        sheet: PathBuf,
    },

    /// List the beer styles
    Styles,

    /// Create starter config and example tasting sheet
    Init,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("judgebeer_core=info,judgebeer_cli=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Taste {
            no_transition,
            transition_ms,
            format,
            output,
            lang,
            config,
        } => {
            commands::taste::execute(
                no_transition,
                transition_ms,
                format,
                output,
                lang,
                config,
            )
            .await
        }
        Commands::Report {
            query,
            format,
            output,
            lang,
            config,
        } => commands::report::execute(query, format, output, lang, config),
        Commands::Score {
            sheet,
            format,
            output,
            lang,
            config,
        } => commands::score::execute(sheet, format, output, lang, config),
        Commands::Validate { sheet } => commands::validate::execute(sheet),
        Commands::Styles => commands::styles::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
